use crate::address::Address;
use gallery_overlay::Overlay;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

pub type PageResult<T> = Result<T, PageError>;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed markup at byte {position}: {source}")]
    Markup {
        position: u64,
        source: quick_xml::Error,
    },

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
}

/// Position of an element in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn position(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    tag: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn from_start(id: ElementId, start: &BytesStart<'_>) -> PageResult<Self> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).to_lowercase();
        let mut attributes = Vec::new();

        for attr in start.html_attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_lowercase();
            let value = match attr.unescape_value() {
                Ok(value) => value.into_owned(),
                Err(_) => decode_references(&String::from_utf8_lossy(&attr.value)),
            };
            attributes.push((key, value));
        }

        Ok(Self {
            id,
            tag,
            attributes,
        })
    }
}

/// Decode each character reference quick-xml understands on its own. Bare
/// `&` and entities it does not know (`&nbsp;`) are kept verbatim.
fn decode_references(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match tail[1..].find(['&', ';']).map(|pos| pos + 1) {
            Some(end) if tail.as_bytes()[end] == b';' => {
                let reference = &tail[..=end];
                match unescape(reference) {
                    Ok(text) => out.push_str(&text),
                    Err(_) => out.push_str(reference),
                }
                rest = &tail[end + 1..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// A loaded page: its elements in document order, the overlays inserted on
/// top of it, listener registrations and the address it is shown at.
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    overlays: Vec<Overlay>,
    click_listeners: HashMap<ElementId, Vec<(String, usize)>>,
    key_listeners: BTreeSet<String>,
    address: Address,
}

impl Page {
    pub fn parse(markup: &str, address: &str) -> PageResult<Self> {
        let mut reader = Reader::from_str(markup);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.trim_text(true);

        let mut elements = Vec::new();

        loop {
            let event = reader.read_event().map_err(|source| PageError::Markup {
                position: reader.error_position(),
                source,
            })?;

            match event {
                Event::Start(ref start) | Event::Empty(ref start) => {
                    let id = ElementId(elements.len());
                    elements.push(Element::from_start(id, start)?);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        tracing::debug!("Parsed {} elements for {address}", elements.len());

        Ok(Self {
            elements,
            overlays: Vec::new(),
            click_listeners: HashMap::new(),
            key_listeners: BTreeSet::new(),
            address: Address::parse(address),
        })
    }

    pub fn from_file(path: &Path, address: &str) -> PageResult<Self> {
        let markup = fs::read_to_string(path)?;
        Self::parse(&markup, address)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Elements whose `attribute` equals `value`, in document order.
    pub fn select<'a>(
        &'a self,
        attribute: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements
            .iter()
            .filter(move |element| element.attr(attribute) == Some(value))
    }

    /// Insert `overlay`, replacing any overlay that already uses its id.
    pub fn insert_overlay(&mut self, overlay: Overlay) {
        self.overlays.retain(|existing| existing.id() != overlay.id());
        self.overlays.push(overlay);
    }

    pub fn remove_overlay(&mut self, id: &str) -> Option<Overlay> {
        let pos = self.overlays.iter().position(|overlay| overlay.id() == id)?;
        Some(self.overlays.remove(pos))
    }

    pub fn overlay(&self, id: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|overlay| overlay.id() == id)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Register a click on `target` as opening item `index` of the gallery
    /// identified by `owner`. Registrations from different owners add up;
    /// registering again for the same owner replaces its earlier index.
    pub fn on_click(&mut self, target: ElementId, owner: &str, index: usize) {
        let listeners = self.click_listeners.entry(target).or_default();
        match listeners.iter_mut().find(|(existing, _)| existing == owner) {
            Some(listener) => listener.1 = index,
            None => listeners.push((owner.to_string(), index)),
        }
    }

    /// Item index `owner` registered for clicks on `target`.
    pub fn click_target(&self, target: ElementId, owner: &str) -> Option<usize> {
        self.click_listeners
            .get(&target)?
            .iter()
            .find(|(existing, _)| existing == owner)
            .map(|(_, index)| *index)
    }

    pub fn attach_key_listener(&mut self, owner: &str) {
        self.key_listeners.insert(owner.to_string());
    }

    pub fn detach_key_listener(&mut self, owner: &str) {
        self.key_listeners.remove(owner);
    }

    pub fn has_key_listener(&self, owner: &str) -> bool {
        self.key_listeners.contains(owner)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Rewrite the current address in place, the way a history replace
    /// does. Nothing is reloaded or re-parsed.
    pub fn replace_address(&mut self, address: Address) {
        tracing::debug!("Replacing address {} with {address}", self.address);
        self.address = address;
    }
}
