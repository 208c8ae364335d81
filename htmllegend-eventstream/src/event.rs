use std::rc::Rc;

use htmllegend_common::NodeId;
use strum::{Display, EnumString, VariantNames};

/// DOM event types that legend elements listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum DomEventType {
    MouseOver,
    MouseOut,
    Click,
}

/// An event delivered to element listeners
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub event_type: DomEventType,

    /// Element the event originated on. Listeners on ancestors see the same target.
    pub target: NodeId,
}

impl DomEvent {
    pub fn new(event_type: DomEventType, target: NodeId) -> Self {
        Self { event_type, target }
    }
}

pub type EventHandler = Rc<dyn Fn(&DomEvent)>;

/// Something that can deliver DOM events to listeners bound on its elements
pub trait EventTarget {
    fn dispatch_event(&mut self, event: &DomEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_event_type_names() {
        assert_eq!(DomEventType::MouseOver.to_string(), "mouseover");
        assert_eq!(DomEventType::MouseOut.to_string(), "mouseout");
        assert_eq!(DomEventType::Click.to_string(), "click");
        assert_eq!(
            DomEventType::from_str("mouseout").unwrap(),
            DomEventType::MouseOut
        );
        assert!(DomEventType::from_str("keydown").is_err());
        assert_eq!(
            DomEventType::VARIANTS,
            &["mouseover", "mouseout", "click"]
        );
    }
}
