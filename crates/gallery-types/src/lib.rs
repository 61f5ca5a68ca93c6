pub mod types;

pub use types::{Direction, FileType, GalleryItem};
