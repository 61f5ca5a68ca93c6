pub mod nav;

pub use nav::{GalleryState, ViewState};
