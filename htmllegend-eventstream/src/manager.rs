use htmllegend_common::NodeId;

use crate::event::{DomEvent, DomEventType, EventTarget};
use crate::pointer::{MouseButton, PointerEvent};

/// Turns pointer input into `mouseover`, `mouseout` and `click` DOM events
pub struct EventStreamManager {
    current_node: Option<NodeId>,
    // Track current mousedown node, used for click determination
    mousedown_node: Option<NodeId>,
    mousedown_button: Option<MouseButton>,
}

impl EventStreamManager {
    pub fn new() -> Self {
        Self {
            current_node: None,
            mousedown_node: None,
            mousedown_button: None,
        }
    }

    /// Element currently under the cursor
    pub fn hovered(&self) -> Option<NodeId> {
        self.current_node
    }

    pub fn dispatch<T: EventTarget + ?Sized>(&mut self, event: &PointerEvent, target: &mut T) {
        // Enter/leave first so that a press on a new element is preceded by its mouseover
        self.handle_hover(event.target(), target);

        match event {
            PointerEvent::Pressed { target: node, button } => {
                // A press outside any element still replaces the earlier press
                self.mousedown_node = *node;
                self.mousedown_button = Some(*button);
            }
            PointerEvent::Released {
                target: node,
                button,
            } => {
                if let Some(node) = node {
                    if self.mousedown_node == Some(*node)
                        && self.mousedown_button == Some(*button)
                        && *button == MouseButton::Left
                    {
                        Self::emit(target, DomEvent::new(DomEventType::Click, *node));
                    }
                }
                self.mousedown_node = None;
                self.mousedown_button = None;
            }
            _ => {}
        }
    }

    fn handle_hover<T: EventTarget + ?Sized>(&mut self, node: Option<NodeId>, target: &mut T) {
        match (self.current_node, node) {
            (Some(prev), Some(curr)) if prev != curr => {
                Self::emit(target, DomEvent::new(DomEventType::MouseOut, prev));
                Self::emit(target, DomEvent::new(DomEventType::MouseOver, curr));
            }
            (Some(prev), None) => {
                Self::emit(target, DomEvent::new(DomEventType::MouseOut, prev));
            }
            (None, Some(curr)) => {
                Self::emit(target, DomEvent::new(DomEventType::MouseOver, curr));
            }
            _ => {}
        }
        self.current_node = node;
    }

    fn emit<T: EventTarget + ?Sized>(target: &mut T, event: DomEvent) {
        tracing::trace!(event_type = %event.event_type, target = %event.target, "dispatch");
        target.dispatch_event(&event);
    }
}

impl Default for EventStreamManager {
    fn default() -> Self {
        Self::new()
    }
}
