use crate::render::render;
use gallery_config::GalleryConfig;
use gallery_types::GalleryItem;
use quick_xml::escape::escape;
use shared::accessibility::{AccessibilityInfo, AriaRole, item_announcement};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    Previous,
    Next,
    Close,
}

impl ControlAction {
    pub const ALL: &'static [Self] = &[Self::Previous, Self::Next, Self::Close];

    pub fn label(self) -> &'static str {
        match self {
            ControlAction::Previous => "Previous",
            ControlAction::Next => "Next",
            ControlAction::Close => "Close",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ControlAction::Previous => "media-modal-prev",
            ControlAction::Next => "media-modal-next",
            ControlAction::Close => "media-modal-close",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            ControlAction::Previous => "&#8249;",
            ControlAction::Next => "&#8250;",
            ControlAction::Close => "&times;",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub action: ControlAction,
    pub accessibility: AccessibilityInfo,
}

impl Control {
    fn new(action: ControlAction, disabled: bool) -> Self {
        Self {
            action,
            accessibility: AccessibilityInfo::button(action.label()).disabled_if(disabled),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.accessibility.disabled
    }
}

/// The modal surface for one gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    id: String,
    index: usize,
    controls: Vec<Control>,
    content: String,
    accessibility: AccessibilityInfo,
}

impl Overlay {
    pub fn build(item: &GalleryItem, total: usize, config: &GalleryConfig) -> Self {
        let index = item.index();
        let controls = ControlAction::ALL
            .iter()
            .map(|&action| {
                let disabled = match action {
                    ControlAction::Previous => index == 0,
                    ControlAction::Next => index + 1 >= total,
                    ControlAction::Close => false,
                };
                Control::new(action, disabled)
            })
            .collect();

        Self {
            id: config.overlay_id.clone(),
            index,
            controls,
            content: render(item, config),
            accessibility: AccessibilityInfo::dialog()
                .with_label(item_announcement(index, total, item.file_name())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, action: ControlAction) -> Option<&Control> {
        self.controls.iter().find(|control| control.action == action)
    }

    pub fn label(&self) -> String {
        self.accessibility.get_aria_label()
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();

        let _ = write!(out, r#"<div id="{}" class="media-modal""#, escape(&self.id));
        write_attributes(&mut out, &self.accessibility);
        out.push('>');

        for control in &self.controls {
            if control.action == ControlAction::Close {
                continue;
            }
            write_control(&mut out, control);
        }

        let figure = AccessibilityInfo::new(AriaRole::Figure);
        out.push_str(r#"<div class="media-modal-content""#);
        write_attributes(&mut out, &figure);
        let _ = write!(out, ">{}</div>", self.content);

        if let Some(close) = self.control(ControlAction::Close) {
            write_control(&mut out, close);
        }

        out.push_str("</div>");
        out
    }
}

fn write_control(out: &mut String, control: &Control) {
    let _ = write!(
        out,
        r#"<button type="button" class="{}" data-action="{}""#,
        control.action.class(),
        control.action.label().to_lowercase()
    );
    write_attributes(out, &control.accessibility);
    let _ = write!(out, ">{}</button>", control.action.glyph());
}

fn write_attributes(out: &mut String, info: &AccessibilityInfo) {
    for (key, value) in info.aria_attributes() {
        let _ = write!(out, r#" {key}="{}""#, escape(&value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_types::FileType;

    fn item(index: usize) -> GalleryItem {
        GalleryItem::new(
            index,
            format!("https://bucket/{index}.jpg"),
            FileType::Image,
            "image/jpeg",
            format!("photo {index}"),
        )
    }

    #[test]
    fn test_boundary_controls_are_disabled() {
        let config = GalleryConfig::default();

        let first = Overlay::build(&item(0), 3, &config);
        assert!(first.control(ControlAction::Previous).is_some_and(Control::is_disabled));
        assert!(!first.control(ControlAction::Next).is_some_and(Control::is_disabled));

        let last = Overlay::build(&item(2), 3, &config);
        assert!(!last.control(ControlAction::Previous).is_some_and(Control::is_disabled));
        assert!(last.control(ControlAction::Next).is_some_and(Control::is_disabled));
    }

    #[test]
    fn test_markup_structure() {
        let overlay = Overlay::build(&item(1), 3, &GalleryConfig::default());
        let html = overlay.to_markup();

        assert!(html.starts_with(r#"<div id="media-modal" class="media-modal" role="dialog""#));
        assert!(html.contains(r#"aria-label="Item 2 of 3: photo 1""#));
        assert!(html.contains(r#"aria-modal="true""#));
        assert!(html.contains(r#"data-action="previous""#));
        assert!(html.contains(r#"data-action="next""#));
        assert!(html.contains(r#"data-action="close""#));
        assert!(html.contains(r#"<div class="media-modal-content" role="figure" aria-label="Media item">"#));
        assert!(html.contains(overlay.content()));
        assert!(html.ends_with("</button></div>"));
    }

    #[test]
    fn test_overlay_uses_configured_id() {
        let config = GalleryConfig {
            overlay_id: "viewer".to_string(),
            ..GalleryConfig::default()
        };
        let overlay = Overlay::build(&item(0), 1, &config);

        assert_eq!(overlay.id(), "viewer");
        assert_eq!(overlay.label(), "Item 1 of 1: photo 0");
        assert_eq!(overlay.controls().len(), ControlAction::ALL.len());
    }
}
