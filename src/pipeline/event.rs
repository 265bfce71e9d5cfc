use serde::{Deserialize, Serialize};

use super::signal::{Rect, SignalKind};
use super::time::Timestamp;

// Records handed to the kernel. Shape is fixed by what the kernel's
// screen-visit and interaction collectors expect.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructuredEvent {
    ScreenVisit(ScreenVisitEvent),
    Interaction(InteractionEvent),
}

impl StructuredEvent {
    pub fn timestamp(&self) -> Timestamp {
        match self {
            StructuredEvent::ScreenVisit(e) => e.timestamp,
            StructuredEvent::Interaction(e) => e.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenVisitEvent {
    pub origin: String,
    pub element_class_name: Option<String>,
    pub title: String,
    pub timestamp: Timestamp,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub interaction_kind: InteractionKind,
    pub element_class_name: Option<String>,
    pub text: Option<String>,
    pub content_description: Option<String>,
    pub resource_id: Option<String>,
    pub timestamp: Timestamp,
    pub screen_bounds: Option<Rect>,
    pub parent_bounds: Option<Rect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Clicked,
    ContextClicked,
    LongClicked,
    Selected,
    Scrolled,
}

impl InteractionKind {
    pub fn from_signal(kind: SignalKind) -> Option<Self> {
        match kind {
            SignalKind::ViewClicked => Some(InteractionKind::Clicked),
            SignalKind::ViewContextClicked => Some(InteractionKind::ContextClicked),
            SignalKind::ViewLongClicked => Some(InteractionKind::LongClicked),
            SignalKind::ViewSelected => Some(InteractionKind::Selected),
            SignalKind::ViewScrolled => Some(InteractionKind::Scrolled),
            SignalKind::WindowStateChanged | SignalKind::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Undefined,
    Portrait,
    Landscape,
}

impl Orientation {
    /// Host configuration codes: 1 portrait, 2 landscape.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Orientation::Portrait,
            2 => Orientation::Landscape,
            _ => Orientation::Undefined,
        }
    }
}
