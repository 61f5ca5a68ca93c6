use crate::key_binds::{GalleryAction, Key, init_key_binds};
use crate::message::{Message, PageEvent};
use crate::page::{Element, Page};
use gallery_config::{AutoplayTarget, GalleryConfig};
use gallery_nav::{GalleryState, ViewState};
use gallery_overlay::Overlay;
use gallery_types::{Direction, FileType, GalleryItem};
use shared::media::DEFAULT_MIME_TYPE;
use std::collections::HashMap;

/// Modal viewer over the gallery members of one page.
///
/// Each instance owns its item list and selection; the overlay id from the
/// configuration tells instances on the same page apart.
#[derive(Debug, Clone)]
pub struct MediaGallery {
    state: GalleryState,
    config: GalleryConfig,
    key_binds: HashMap<Key, GalleryAction>,
}

impl MediaGallery {
    /// Collect the page's gallery members in document order and register a
    /// click handler on each one.
    pub fn collect(page: &mut Page, config: GalleryConfig) -> Self {
        let members: Vec<_> = page
            .select(&config.member_attribute, "true")
            .map(|element| (element.id(), element.tag().to_string(), member_fields(element)))
            .collect();

        let mut items = Vec::with_capacity(members.len());

        for (target, tag, fields) in members {
            let Some((url, declared, mime, name)) = fields else {
                tracing::warn!(
                    "Skipping gallery member <{tag}> at element {} without data-url",
                    target.position()
                );
                continue;
            };

            let file_type = if config.verify_types {
                verified_type(declared, &mime, &name)
            } else {
                declared
            };

            let index = items.len();
            page.on_click(target, &config.overlay_id, index);
            items.push(GalleryItem::new(index, url, file_type, mime, name));
        }

        tracing::debug!("Collected {} gallery items", items.len());

        Self {
            state: GalleryState::new(items),
            config,
            key_binds: init_key_binds(),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn view(&self) -> ViewState {
        self.state.view()
    }

    pub fn items(&self) -> &[GalleryItem] {
        self.state.items()
    }

    /// This gallery's overlay, if it is open on `page`.
    pub fn overlay<'a>(&self, page: &'a Page) -> Option<&'a Overlay> {
        page.overlay(&self.config.overlay_id)
    }

    /// Show item `index`, replacing whatever this gallery had open.
    /// Returns `false`, changing nothing, when `index` is out of range.
    pub fn open(&mut self, page: &mut Page, index: usize) -> bool {
        let overlay = match self.state.get(index) {
            Some(item) => Overlay::build(item, self.state.total(), &self.config),
            None => {
                tracing::debug!("No gallery item at index {index}");
                return false;
            }
        };

        let label = overlay.label();
        self.close(page);
        self.state.open(index);
        page.insert_overlay(overlay);
        page.attach_key_listener(&self.config.overlay_id);

        tracing::info!("Opened {label}");
        true
    }

    pub fn close(&mut self, page: &mut Page) {
        if let Some(overlay) = page.remove_overlay(&self.config.overlay_id) {
            tracing::info!("Closed gallery item {}", overlay.index() + 1);
        }
        page.detach_key_listener(&self.config.overlay_id);
        self.state.close();
    }

    /// Step to the neighbouring item. At either end, or while closed, the
    /// overlay is left exactly as it is.
    pub fn navigate(&mut self, page: &mut Page, direction: Direction) {
        if let Some(index) = self.state.navigate(direction).map(GalleryItem::index) {
            self.open(page, index);
        }
    }

    pub fn handle_key(&mut self, page: &mut Page, key: &Key) {
        if let Some(action) = self.key_binds.get(key).copied() {
            self.update(page, action.message());
        }
    }

    /// Open the item named by the autoplay query parameter, then strip the
    /// parameter from the current address without reloading.
    pub fn autoplay_from_url(&mut self, page: &mut Page) {
        let param = self.config.autoplay_param.clone();
        let Some(value) = page.address().query_param(&param).map(str::to_owned) else {
            return;
        };

        let target = AutoplayTarget::parse(&value);
        match self.state.autoplay_index(target) {
            Some(index) => {
                tracing::info!("Autoplay requested {target} item");
                self.open(page, index);
            }
            None => tracing::debug!("Autoplay requested on an empty gallery"),
        }

        let stripped = page.address().without_param(&param);
        page.replace_address(stripped);
    }

    pub fn update(&mut self, page: &mut Page, message: Message) {
        match message {
            Message::Open(index) => {
                self.open(page, index);
            }
            Message::Close => self.close(page),
            Message::Navigate(direction) => self.navigate(page, direction),
            Message::Key(key) => self.handle_key(page, &key),
            Message::Autoplay => self.autoplay_from_url(page),
        }
    }

    /// Route a page event through the listeners this gallery registered.
    pub fn dispatch(&mut self, page: &mut Page, event: PageEvent) {
        let message = match event {
            PageEvent::Load => Some(Message::Autoplay),
            PageEvent::Click(target) => page
                .click_target(target, &self.config.overlay_id)
                .map(Message::Open),
            PageEvent::KeyDown(key) => page
                .has_key_listener(&self.config.overlay_id)
                .then_some(Message::Key(key)),
        };

        if let Some(message) = message {
            self.update(page, message);
        }
    }
}

type MemberFields = (String, FileType, String, String);

fn member_fields(element: &Element) -> Option<MemberFields> {
    let url = element.attr("data-url")?.to_string();
    let file_type = FileType::parse(element.attr("data-file-type").unwrap_or_default());
    let mime = element
        .attr("data-mime-type")
        .unwrap_or(DEFAULT_MIME_TYPE)
        .to_string();
    let name = element.attr("data-filename").unwrap_or_default().to_string();

    Some((url, file_type, mime, name))
}

fn verified_type(declared: FileType, mime: &str, name: &str) -> FileType {
    if declared.is_viewable() && FileType::from_mime(mime) != Some(declared) {
        tracing::warn!("{name}: declared {declared} but MIME type is {mime}, treating as unknown");
        FileType::Unknown
    } else {
        declared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"<table>
        <tr><td><a href="#" data-media="true" data-url="https://s3/a.jpg" data-file-type="image" data-mime-type="image/jpeg" data-filename="A">View</a></td></tr>
        <tr><td><a href="#" data-media="true" data-file-type="image">broken</a></td></tr>
        <tr><td><a href="#" data-media="true" data-url="https://s3/b.mp4" data-file-type="video" data-mime-type="video/mp4" data-filename="B">View</a></td></tr>
        <tr><td><a href="/plain.pdf" target="_blank">View</a></td></tr>
        <tr><td><a href="#" data-media="true" data-url="https://s3/c.zip" data-file-type="arch" data-mime-type="application/zip" data-filename="C">View</a></td></tr>
    </table>"##;

    fn load(address: &str) -> (Page, MediaGallery) {
        let mut page = Page::parse(PAGE, address).expect("markup should parse");
        let gallery = MediaGallery::collect(&mut page, GalleryConfig::default());
        (page, gallery)
    }

    #[test]
    fn test_collect_skips_members_without_url() {
        let (_, gallery) = load("/");
        let names: Vec<&str> = gallery.items().iter().map(GalleryItem::file_name).collect();

        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(gallery.items()[2].file_type(), FileType::Unknown);
        assert!(
            gallery
                .items()
                .iter()
                .enumerate()
                .all(|(idx, item)| item.index() == idx)
        );
    }

    #[test]
    fn test_missing_attributes_get_defaults() {
        let mut page = Page::parse(
            r#"<a data-media="true" data-url="https://s3/x"></a>"#,
            "/",
        )
        .expect("markup should parse");
        let gallery = MediaGallery::collect(&mut page, GalleryConfig::default());
        let item = &gallery.items()[0];

        assert_eq!(item.file_type(), FileType::Unknown);
        assert_eq!(item.mime_type(), DEFAULT_MIME_TYPE);
        assert_eq!(item.file_name(), "");
    }

    #[test]
    fn test_open_and_close() {
        let (mut page, mut gallery) = load("/");

        assert!(gallery.open(&mut page, 1));
        assert_eq!(gallery.view(), ViewState::Open(1));
        assert_eq!(page.overlay_count(), 1);
        assert!(page.has_key_listener("media-modal"));

        gallery.close(&mut page);
        assert_eq!(gallery.view(), ViewState::Closed);
        assert_eq!(page.overlay_count(), 0);
        assert!(!page.has_key_listener("media-modal"));

        gallery.close(&mut page);
        assert_eq!(gallery.view(), ViewState::Closed);
    }

    #[test]
    fn test_open_out_of_range_changes_nothing() {
        let (mut page, mut gallery) = load("/");
        gallery.open(&mut page, 0);

        assert!(!gallery.open(&mut page, 3));
        assert_eq!(gallery.view(), ViewState::Open(0));
        assert_eq!(page.overlay_count(), 1);
    }

    #[test]
    fn test_verify_types_downgrades_mismatches() {
        let mut page = Page::parse(
            r#"<div>
                <a data-media="true" data-url="u1" data-file-type="image" data-mime-type="video/mp4"></a>
                <a data-media="true" data-url="u2" data-file-type="video" data-mime-type="video/mp4"></a>
            </div>"#,
            "/",
        )
        .expect("markup should parse");
        let config = GalleryConfig {
            verify_types: true,
            ..GalleryConfig::default()
        };
        let gallery = MediaGallery::collect(&mut page, config);

        assert_eq!(gallery.items()[0].file_type(), FileType::Unknown);
        assert_eq!(gallery.items()[1].file_type(), FileType::Video);
    }

    #[test]
    fn test_trusting_by_default() {
        let mut page = Page::parse(
            r#"<a data-media="true" data-url="u1" data-file-type="image" data-mime-type="video/mp4"></a>"#,
            "/",
        )
        .expect("markup should parse");
        let gallery = MediaGallery::collect(&mut page, GalleryConfig::default());

        assert_eq!(gallery.items()[0].file_type(), FileType::Image);
    }
}
