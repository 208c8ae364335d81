use htmllegend_common::NodeId;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Low level pointer input, already resolved to the element under the cursor
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved. `target` is None when the cursor is not over any element.
    Moved { target: Option<NodeId> },

    /// Mouse button was pressed
    Pressed {
        target: Option<NodeId>,
        button: MouseButton,
    },

    /// Mouse button was released
    Released {
        target: Option<NodeId>,
        button: MouseButton,
    },

    /// Cursor left the page
    Left,
}

impl PointerEvent {
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::Moved { target } => *target,
            Self::Pressed { target, .. } => *target,
            Self::Released { target, .. } => *target,
            Self::Left => None,
        }
    }
}
