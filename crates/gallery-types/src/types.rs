use serde::{Deserialize, Serialize};
use std::fmt;

/// How a gallery item is shown inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
    #[default]
    Unknown,
}

impl FileType {
    /// Parse a `data-file-type` value. Anything other than `image` or `video`
    /// (`arch`, empty, typos) is shown as unsupported.
    pub fn parse(value: &str) -> Self {
        match value {
            "image" => FileType::Image,
            "video" => FileType::Video,
            _ => FileType::Unknown,
        }
    }

    /// File type implied by the top-level MIME type, if it is a viewable one.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.split('/').next().map(str::trim) {
            Some("image") => Some(FileType::Image),
            Some("video") => Some(FileType::Video),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Unknown => "unknown",
        }
    }

    pub fn is_viewable(self) -> bool {
        !matches!(self, FileType::Unknown)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One media asset collected from the page. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    url: String,
    file_type: FileType,
    mime_type: String,
    file_name: String,
    index: usize,
}

impl GalleryItem {
    pub fn new(
        index: usize,
        url: impl Into<String>,
        file_type: FileType,
        mime_type: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            file_type,
            mime_type: mime_type.into(),
            file_name: file_name.into(),
            index,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Position in the gallery, in document order.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    /// Neighbour of `index` in a sequence of `len` items. Never wraps.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        let target = index.checked_add_signed(self.offset())?;
        (target < len).then_some(target)
    }
}
