use quick_xml::escape::escape;
use shared::media::{self, DEFAULT_MIME_TYPE, MediaKind};

const LINK_TEXT: &str = "View";
const EMPTY_CELL: &str = "-";

/// Which admin list a link cell is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    Image,
    Video,
    #[default]
    Any,
}

/// A stored object as the admin list sees it. `url` is `None` when no
/// signed link could be generated.
#[derive(Debug, Clone, Copy)]
pub struct StoredObject<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub url: Option<&'a str>,
}

/// File type and MIME type advertised for `key` in a list of `list` kind.
pub fn classify(key: &str, list: ListKind) -> (&'static str, &'static str) {
    let kind = MediaKind::from_name(key);

    match list {
        ListKind::Image if kind != MediaKind::Image => return ("unknown", DEFAULT_MIME_TYPE),
        ListKind::Video if kind != MediaKind::Video => return ("unknown", DEFAULT_MIME_TYPE),
        _ => {}
    }

    let (mime, encoding) = media::guess_type(key);
    match encoding {
        Some(encoding) => tracing::debug!("{key}: {kind}, {mime} ({encoding})"),
        None => tracing::debug!("{key}: {kind}, {mime}"),
    }

    (kind.gallery_type(), mime)
}

/// Link cell for a stored object.
///
/// Documents open directly in a new tab; everything else becomes a gallery
/// member carrying the data attributes the gallery collects.
pub fn member_link(object: Option<&StoredObject<'_>>, list: ListKind) -> String {
    let Some(object) = object else {
        return EMPTY_CELL.to_string();
    };
    let Some(url) = object.url else {
        tracing::warn!("No link available for {}", object.key);
        return EMPTY_CELL.to_string();
    };

    let (file_type, mime) = classify(object.key, list);
    let url = escape(url);

    if file_type == MediaKind::Document.gallery_type() {
        return format!(r#"<a href="{url}" target="_blank" data-mime-type="{mime}">{LINK_TEXT}</a>"#);
    }

    format!(
        r##"<a href="#" data-media="true" data-url="{url}" data-file-type="{file_type}" data-mime-type="{mime}" data-filename="{}">{LINK_TEXT}</a>"##,
        escape(object.name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object<'a>(key: &'a str, url: Option<&'a str>) -> StoredObject<'a> {
        StoredObject {
            key,
            name: "Q3 \"final\"",
            url,
        }
    }

    #[test]
    fn test_missing_object_or_url() {
        assert_eq!(member_link(None, ListKind::Any), "-");
        assert_eq!(
            member_link(Some(&object("media/a.png", None)), ListKind::Any),
            "-"
        );
    }

    #[test]
    fn test_document_is_a_plain_link() {
        let html = member_link(
            Some(&object("media/readme.pdf", Some("https://s3/readme.pdf"))),
            ListKind::Any,
        );

        assert_eq!(
            html,
            r#"<a href="https://s3/readme.pdf" target="_blank" data-mime-type="application/pdf">View</a>"#
        );
    }

    #[test]
    fn test_archive_is_a_member() {
        let html = member_link(
            Some(&object("media/dump.tar.gz", Some("https://s3/d?a=1&b=2"))),
            ListKind::Any,
        );

        assert!(html.contains(r#"data-media="true""#));
        assert!(html.contains(r#"data-file-type="arch""#));
        assert!(html.contains(r#"data-mime-type="application/gzip""#));
        assert!(html.contains(r#"data-url="https://s3/d?a=1&amp;b=2""#));
        assert!(html.contains(r#"data-filename="Q3 &quot;final&quot;""#));
    }

    #[test]
    fn test_restricted_lists() {
        assert_eq!(classify("a.PNG", ListKind::Image), ("image", "image/png"));
        assert_eq!(classify("a.mp4", ListKind::Image), ("unknown", DEFAULT_MIME_TYPE));
        assert_eq!(classify("a.mov", ListKind::Video), ("video", "video/quicktime"));
        assert_eq!(classify("a.gif", ListKind::Video), ("unknown", DEFAULT_MIME_TYPE));
        assert_eq!(classify("a.csv", ListKind::Any), ("unknown", "text/csv"));
        assert_eq!(classify("noext", ListKind::Any), ("unknown", DEFAULT_MIME_TYPE));
        assert_eq!(
            classify("backups/db.TAR.BZ2", ListKind::Any),
            ("arch", "application/x-bzip2")
        );
    }
}
