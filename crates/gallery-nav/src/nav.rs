use gallery_config::AutoplayTarget;
use gallery_types::{Direction, GalleryItem};
use serde::{Deserialize, Serialize};

/// Observable state of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewState {
    #[default]
    Closed,
    Open(usize),
}

/// Ordered gallery items plus the index of the item on screen, if any.
///
/// The item list is fixed once built; only the selection moves.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    items: Vec<GalleryItem>,
    cur_idx: Option<usize>,
}

impl GalleryState {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            cur_idx: None,
        }
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.cur_idx.and_then(|idx| self.items.get(idx))
    }

    pub fn view(&self) -> ViewState {
        match self.cur_idx {
            Some(idx) => ViewState::Open(idx),
            None => ViewState::Closed,
        }
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn get(&self, idx: usize) -> Option<&GalleryItem> {
        self.items.get(idx)
    }

    /// Select `idx`. Out of range leaves the state untouched.
    pub fn open(&mut self, idx: usize) -> Option<&GalleryItem> {
        if idx < self.items.len() {
            self.cur_idx = Some(idx);
            self.current()
        } else {
            tracing::debug!(
                "Ignoring open of index {idx}, gallery has {} items",
                self.items.len()
            );
            None
        }
    }

    pub fn close(&mut self) {
        self.cur_idx = None;
    }

    /// Index `direction` would move to, without moving.
    pub fn neighbour(&self, direction: Direction) -> Option<usize> {
        self.cur_idx
            .and_then(|idx| direction.step(idx, self.items.len()))
    }

    /// Move one step. At either end, or while closed, nothing changes and
    /// `None` is returned.
    pub fn navigate(&mut self, direction: Direction) -> Option<&GalleryItem> {
        match self.neighbour(direction) {
            Some(idx) => self.open(idx),
            None => {
                tracing::debug!("Navigation {direction:?} from {:?} is a no-op", self.cur_idx);
                None
            }
        }
    }

    /// Index an autoplay request resolves to, `None` for an empty gallery.
    pub fn autoplay_index(&self, target: AutoplayTarget) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        Some(match target {
            AutoplayTarget::First => 0,
            AutoplayTarget::Last => self.items.len() - 1,
        })
    }
}
