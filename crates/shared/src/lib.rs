pub mod accessibility;
pub mod media;

pub use media::{Encoding, MediaKind, guess_type};
