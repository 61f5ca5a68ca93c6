pub mod address;
pub mod app;
pub mod key_binds;
pub mod member;
pub mod message;
pub mod page;

pub use address::Address;
pub use app::MediaGallery;
pub use key_binds::{GalleryAction, Key};
pub use message::{Message, PageEvent};
pub use page::{Element, ElementId, Page, PageError, PageResult};
