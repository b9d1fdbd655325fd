/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer pressed over an element
    PointerDown {
        target: Option<String>,
        button: MouseButton,
    },
    /// Full click (press and release) on an element
    Click {
        target: Option<String>,
        button: MouseButton,
    },
}

impl Event {
    pub fn pointer_down(target: impl Into<String>) -> Self {
        Self::PointerDown {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    /// The targeted element id, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::PointerDown { target, .. } | Self::Click { target, .. } => target.as_deref(),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, stop propagation.
    Consumed,
    /// Event was not handled, continue propagation.
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
