pub mod overlay;
pub mod render;

pub use overlay::{Control, ControlAction, Overlay};
pub use render::render;

// Re-export types from gallery-types for convenience
pub use gallery_types::{FileType, GalleryItem};
