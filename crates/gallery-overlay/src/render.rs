use gallery_config::GalleryConfig;
use gallery_types::{FileType, GalleryItem};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Content markup for `item`: the inline media (or the unsupported notice and
/// a download link) followed by the file name caption.
///
/// The shape depends only on the item's file type; URL, MIME type and name
/// are substituted escaped.
pub fn render(item: &GalleryItem, config: &GalleryConfig) -> String {
    let url = escape(item.url());
    let name = escape(item.file_name());
    let cross_origin = config.cross_origin.as_str();
    let loading = if config.lazy_loading { "lazy" } else { "eager" };

    let mut out = String::new();

    match item.file_type() {
        FileType::Image => {
            let _ = write!(
                out,
                r#"<img class="media-modal-image" src="{url}" alt="{name}" loading="{loading}" crossorigin="{cross_origin}">"#
            );
        }
        FileType::Video => {
            let mime = escape(item.mime_type());
            let _ = write!(
                out,
                r#"<video class="media-modal-video" controls loading="{loading}" crossorigin="{cross_origin}"><source src="{url}" type="{mime}"></video>"#
            );
        }
        FileType::Unknown => {
            let message = escape(&config.unsupported_message);
            let label = escape(&config.download_label);
            let _ = write!(
                out,
                r#"<p class="media-modal-unsupported">{message}</p><a class="media-modal-download" href="{url}" download="{name}">{label}</a>"#
            );
        }
    }

    let _ = write!(out, r#"<p class="media-modal-caption">{name}</p>"#);
    out
}
