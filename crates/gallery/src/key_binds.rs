use crate::message::Message;
use gallery_types::Direction;
use std::collections::HashMap;

/// A keyboard key, named after the DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryAction {
    Close,
    Previous,
    Next,
}

impl GalleryAction {
    pub fn message(self) -> Message {
        match self {
            GalleryAction::Close => Message::Close,
            GalleryAction::Previous => Message::Navigate(Direction::Previous),
            GalleryAction::Next => Message::Navigate(Direction::Next),
        }
    }
}

pub fn init_key_binds() -> HashMap<Key, GalleryAction> {
    let mut binds = HashMap::new();

    binds.insert(Key::Escape, GalleryAction::Close);
    binds.insert(Key::ArrowLeft, GalleryAction::Previous);
    binds.insert(Key::ArrowRight, GalleryAction::Next);

    binds
}
