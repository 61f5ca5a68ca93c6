use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AriaRole {
    #[default]
    Dialog,
    Button,
    Figure,
}

impl AriaRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AriaRole::Dialog => "dialog",
            AriaRole::Button => "button",
            AriaRole::Figure => "figure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityInfo {
    pub role: AriaRole,
    pub label: Option<String>,
    pub modal: bool,
    pub disabled: bool,
}

impl AccessibilityInfo {
    pub fn new(role: AriaRole) -> Self {
        Self {
            role,
            label: None,
            modal: false,
            disabled: false,
        }
    }

    pub fn dialog() -> Self {
        Self::new(AriaRole::Dialog).make_modal()
    }

    pub fn button<S: Into<String>>(label: S) -> Self {
        Self::new(AriaRole::Button).with_label(label)
    }

    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn make_modal(mut self) -> Self {
        self.modal = true;
        self
    }

    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attribute pairs in a stable order, values unescaped. Every role gets
    /// an `aria-label`, falling back to the role's default.
    pub fn aria_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("role", self.role.as_str().to_string()),
            ("aria-label", self.get_aria_label()),
        ];

        if self.modal {
            attrs.push(("aria-modal", "true".to_string()));
        }

        if self.disabled {
            attrs.push(("aria-disabled", "true".to_string()));
        }

        attrs
    }

    pub fn get_aria_label(&self) -> String {
        if let Some(ref label) = self.label {
            label.clone()
        } else {
            self.get_default_label().to_string()
        }
    }

    fn get_default_label(&self) -> &'static str {
        match self.role {
            AriaRole::Dialog => "Media viewer",
            AriaRole::Button => "Gallery action",
            AriaRole::Figure => "Media item",
        }
    }
}

/// Announcement used as the dialog label, `position` is zero based.
pub fn item_announcement(position: usize, total: usize, file_name: &str) -> String {
    if file_name.is_empty() {
        format!("Item {} of {}", position + 1, total)
    } else {
        format!("Item {} of {}: {}", position + 1, total, file_name)
    }
}
