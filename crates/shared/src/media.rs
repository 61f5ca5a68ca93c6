use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "ico"];

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "mov"];

pub const ARCHIVE_EXTENSIONS: &[&str] = &[
    "zip", "rar", "7z", "tar", "gz", "bz2", "xz", "tgz", "tar.gz", "tbz", "tbz2", "tar.bz2", "txz",
    "tar.xz",
];

pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    "md", "txt", "pdf", "html", "htm", "css", "js", "json", "map",
];

pub const TABLE_EXTENSIONS: &[&str] = &[
    "xls", "xlsx", "xlsm", "ods", "csv", "tsv", "xlsb", "xlt", "xltm", "xltx", "numbers", "prn",
    "slk", "parquet", "feather", "orc",
];

/// Compound extensions checked before the final extension.
const DOUBLE_EXTENSIONS: &[&str] = &["tar.gz", "tar.bz2", "tar.xz"];

const MIME_TYPES: &[(&str, &str)] = &[
    ("md", "text/markdown"),
    ("txt", "text/plain"),
    ("pdf", "application/pdf"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("map", "application/json"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("ogg", "video/ogg"),
    ("mov", "video/quicktime"),
    ("zip", "application/zip"),
    ("rar", "application/x-rar-compressed"),
    ("7z", "application/x-7z-compressed"),
    ("tar", "application/x-tar"),
    ("gz", "application/gzip"),
    ("bz2", "application/x-bzip2"),
    ("xz", "application/x-xz"),
    ("tgz", "application/gzip"),
    ("tar.gz", "application/gzip"),
    ("tbz", "application/x-bzip2"),
    ("tbz2", "application/x-bzip2"),
    ("tar.bz2", "application/x-bzip2"),
    ("txz", "application/x-xz"),
    ("tar.xz", "application/x-xz"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (
        "xlsm",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("csv", "text/csv"),
    ("tsv", "text/tab-separated-values"),
    ("xlsb", "application/vnd.ms-excel.sheet.binary.macroEnabled.12"),
    ("xlt", "application/vnd.ms-excel"),
    (
        "xltx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
    ),
    (
        "xltm",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
    ),
    ("numbers", "application/x-iwork-numbers-sffnumbers"),
    ("prn", "application/octet-stream"),
    ("slk", "application/vnd.slink"),
    ("parquet", "application/parquet"),
    ("feather", "application/feather"),
    ("orc", "application/orc"),
];

/// Broad category of a stored object, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
    Archive,
    Document,
    Table,
    Other,
}

impl MediaKind {
    pub fn from_name(name: &str) -> Self {
        let ext = extension(name);
        Self::from_extension(&ext)
    }

    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_lowercase();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else if ARCHIVE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Archive
        } else if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Document
        } else if TABLE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Table
        } else {
            MediaKind::Other
        }
    }

    /// Value written to a gallery member's `data-file-type` attribute.
    ///
    /// Documents are never gallery members; they are linked directly.
    pub fn gallery_type(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Archive => "arch",
            MediaKind::Document => "file",
            MediaKind::Table | MediaKind::Other => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "Image"),
            MediaKind::Video => write!(f, "Video"),
            MediaKind::Archive => write!(f, "Archive"),
            MediaKind::Document => write!(f, "Document"),
            MediaKind::Table => write!(f, "Table"),
            MediaKind::Other => write!(f, "Other"),
        }
    }
}

/// Transfer encoding reported for compressed archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    Gzip,
    Bzip2,
    Xz,
}

impl Encoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Gzip => "gzip",
            Encoding::Bzip2 => "bzip2",
            Encoding::Xz => "xz",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.rsplit('.').next() {
            Some("gz") => Some(Encoding::Gzip),
            Some("bz2") => Some(Encoding::Bzip2),
            Some("xz") => Some(Encoding::Xz),
            _ => None,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final extension of the file part of `name`, lowercased and without the dot.
///
/// A leading dot (`.bashrc`) does not start an extension.
pub fn extension(name: &str) -> String {
    let file = name.rsplit('/').next().unwrap_or(name);

    match file.rfind('.') {
        Some(pos) if pos > 0 => file[pos + 1..].to_lowercase(),
        _ => String::new(),
    }
}

pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.').to_lowercase();
    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// Guess the content type and encoding of a storage key.
pub fn guess_type(name: &str) -> (&'static str, Option<Encoding>) {
    let name = name.trim().to_lowercase();

    if let Some(ext) = DOUBLE_EXTENSIONS
        .iter()
        .find(|ext| name.ends_with(&format!(".{ext}")))
        && let Some(mime) = mime_for_extension(ext)
    {
        return (mime, Encoding::from_extension(ext));
    }

    let ext = extension(&name);
    if let Some(mime) = mime_for_extension(&ext) {
        return (mime, Encoding::from_extension(&ext));
    }

    tracing::warn!("No MIME type known for {name}, using {DEFAULT_MIME_TYPE}");
    (DEFAULT_MIME_TYPE, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_parsing() {
        assert_eq!(extension("public/image/cat.JPG"), "jpg");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension(".bashrc"), "");
        assert_eq!(extension("dir.v2/README"), "");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(MediaKind::from_name("a/b/photo.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_name("clip.MOV"), MediaKind::Video);
        assert_eq!(MediaKind::from_name("backup.tar.gz"), MediaKind::Archive);
        assert_eq!(MediaKind::from_name("notes.md"), MediaKind::Document);
        assert_eq!(MediaKind::from_name("report.xlsx"), MediaKind::Table);
        assert_eq!(MediaKind::from_name("binary"), MediaKind::Other);
    }

    #[test]
    fn test_gallery_type_names() {
        assert_eq!(MediaKind::Image.gallery_type(), "image");
        assert_eq!(MediaKind::Archive.gallery_type(), "arch");
        assert_eq!(MediaKind::Table.gallery_type(), "unknown");
    }

    #[test]
    fn test_guess_type_prefers_double_extension() {
        assert_eq!(
            guess_type("dump.TAR.GZ"),
            ("application/gzip", Some(Encoding::Gzip))
        );
        assert_eq!(
            guess_type("dump.tar.bz2"),
            ("application/x-bzip2", Some(Encoding::Bzip2))
        );
        assert_eq!(guess_type("logs.tgz"), ("application/gzip", None));
    }

    #[test]
    fn test_guess_type_plain_and_unknown() {
        assert_eq!(guess_type(" Photo.jpeg "), ("image/jpeg", None));
        assert_eq!(guess_type("movie.webm"), ("video/webm", None));
        assert_eq!(guess_type("mystery.bin"), (DEFAULT_MIME_TYPE, None));
    }
}
