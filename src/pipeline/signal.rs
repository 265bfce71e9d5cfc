use serde::{Deserialize, Serialize};

use super::time::Timestamp;

/// Host accessibility event type codes.
pub const TYPE_VIEW_CLICKED: u32 = 0x0000_0001;
pub const TYPE_VIEW_LONG_CLICKED: u32 = 0x0000_0002;
pub const TYPE_VIEW_SELECTED: u32 = 0x0000_0004;
pub const TYPE_WINDOW_STATE_CHANGED: u32 = 0x0000_0020;
pub const TYPE_VIEW_SCROLLED: u32 = 0x0000_1000;
pub const TYPE_VIEW_CONTEXT_CLICKED: u32 = 0x0080_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    WindowStateChanged,
    ViewClicked,
    ViewContextClicked,
    ViewLongClicked,
    ViewSelected,
    ViewScrolled,
    /// Anything the pipeline does not process, keeps the raw code for diagnostics.
    Other(u32),
}

impl SignalKind {
    pub fn from_event_type(code: u32) -> Self {
        match code {
            TYPE_WINDOW_STATE_CHANGED => SignalKind::WindowStateChanged,
            TYPE_VIEW_CLICKED => SignalKind::ViewClicked,
            TYPE_VIEW_CONTEXT_CLICKED => SignalKind::ViewContextClicked,
            TYPE_VIEW_LONG_CLICKED => SignalKind::ViewLongClicked,
            TYPE_VIEW_SELECTED => SignalKind::ViewSelected,
            TYPE_VIEW_SCROLLED => SignalKind::ViewScrolled,
            other => SignalKind::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
}

/// Element metadata resolved by the host before the signal reaches us.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMetadata {
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub content_description: Option<String>,
    pub resource_id: Option<String>,
    pub screen_bounds: Option<Rect>,
    pub parent_bounds: Option<Rect>,
}

/// One instrumentation notification. Lives for a single pipeline pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSignal {
    pub kind: SignalKind,
    #[serde(default)]
    pub origin: Option<String>,
    pub timestamp: Timestamp,
    /// Event-level class name (the window class for window-state changes).
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub text: Vec<String>,
    /// `None` when the source element was no longer readable.
    #[serde(default)]
    pub node: Option<NodeMetadata>,
}

impl RawSignal {
    pub fn new(kind: SignalKind, origin: &str, timestamp: Timestamp) -> Self {
        Self {
            kind,
            origin: Some(origin.to_string()),
            timestamp,
            class_name: None,
            text: Vec::new(),
            node: None,
        }
    }

    pub fn with_node(mut self, node: NodeMetadata) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_window(mut self, class_name: &str, text: &[&str]) -> Self {
        self.class_name = Some(class_name.to_string());
        self.text = text.iter().map(|t| t.to_string()).collect();
        self
    }

    /// The origin, if present and non-empty.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|o| !o.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_host_codes() {
        assert_eq!(SignalKind::from_event_type(1), SignalKind::ViewClicked);
        assert_eq!(SignalKind::from_event_type(32), SignalKind::WindowStateChanged);
        assert_eq!(SignalKind::from_event_type(4096), SignalKind::ViewScrolled);
        assert_eq!(SignalKind::from_event_type(0x0080_0000), SignalKind::ViewContextClicked);
        assert_eq!(SignalKind::from_event_type(8), SignalKind::Other(8));
    }

    #[test]
    fn empty_origin_reads_as_absent() {
        let mut signal = RawSignal::new(SignalKind::ViewClicked, "", 0);
        assert_eq!(signal.origin(), None);
        signal.origin = None;
        assert_eq!(signal.origin(), None);
    }
}
