use crate::key_binds::Key;
use crate::page::ElementId;
use gallery_types::Direction;

/// Requests handled by [`crate::MediaGallery::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Close,
    Navigate(Direction),
    Key(Key),
    Autoplay,
}

/// Raw events raised by the page, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Load,
    Click(ElementId),
    KeyDown(Key),
}
