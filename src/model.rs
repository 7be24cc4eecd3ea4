//! Plain data types shared between the UI and storage.
//!
//! [`Flow`] is a snapshot of a single ledger entry and [`PageButton`] describes
//! a themed, optionally hidden button. Neither type enforces invariants: any
//! consumer may construct a value of the right shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// A recurring income (positive amount) or expense (negative amount).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flow {
    /// Unique identifier, absent until the flow has been stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    /// Glyph identifier, usually an SVG data URI. Absent means no icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Flow {
    pub fn new(name: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            amount,
            icon: None,
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the flow brings money in.
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}

/// Theme colours a [`PageButton`] may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Alternative,
    None,
    Red,
    Yellow,
    Green,
    Purple,
    Blue,
    Light,
    Dark,
    Primary,
}

impl ButtonColor {
    pub const ALL: [ButtonColor; 10] = [
        ButtonColor::Alternative,
        ButtonColor::None,
        ButtonColor::Red,
        ButtonColor::Yellow,
        ButtonColor::Green,
        ButtonColor::Purple,
        ButtonColor::Blue,
        ButtonColor::Light,
        ButtonColor::Dark,
        ButtonColor::Primary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonColor::Alternative => "alternative",
            ButtonColor::None => "none",
            ButtonColor::Red => "red",
            ButtonColor::Yellow => "yellow",
            ButtonColor::Green => "green",
            ButtonColor::Purple => "purple",
            ButtonColor::Blue => "blue",
            ButtonColor::Light => "light",
            ButtonColor::Dark => "dark",
            ButtonColor::Primary => "primary",
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown button color: {0}")]
pub struct ParseColorError(pub String);

impl FromStr for ButtonColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonColor::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Callback run when a button is clicked.
pub type ClickHandler = Rc<dyn Fn()>;

/// Descriptor for a clickable UI element.
///
/// The click handler is never serialized; a deserialized button has none.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct PageButton {
    pub name: String,
    #[serde(skip)]
    pub click_handle: Option<ClickHandler>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ButtonColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl PageButton {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn with_click_handle(mut self, handler: impl Fn() + 'static) -> Self {
        self.click_handle = Some(Rc::new(handler));
        self
    }

    /// Absent visibility means visible.
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    /// Run the click handler. Returns `false` when there is none.
    pub fn click(&self) -> bool {
        match &self.click_handle {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for PageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageButton")
            .field("name", &self.name)
            .field("click_handle", &self.click_handle.as_ref().map(|_| "Fn()"))
            .field("color", &self.color)
            .field("hidden", &self.hidden)
            .finish()
    }
}

impl PartialEq for PageButton {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (&self.click_handle, &other.click_handle) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        };
        same_handler && self.name == other.name && self.color == other.color && self.hidden == other.hidden
    }
}
