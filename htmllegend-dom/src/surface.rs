use htmllegend_common::NodeId;
use htmllegend_eventstream::{DomEventType, EventHandler};

use crate::error::DomError;

/// The DOM operations a widget needs to render itself into a page.
///
/// [`crate::MemoryDocument`] implements it for headless use. Hosts that render into a live
/// page provide their own implementation.
pub trait RenderSurface {
    /// Whether `node` is still attached to the document
    fn contains(&self, node: NodeId) -> bool;

    /// First element in document order matching `selector`
    fn select(&self, selector: &str) -> Result<Option<NodeId>, DomError>;

    /// All descendants of `scope` matching `selector`, in document order
    fn select_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError>;

    /// Create a `tag` element and append it as the last child of `parent`
    fn append_child(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError>;

    /// Detach `node` and its subtree from the document
    fn remove(&mut self, node: NodeId) -> Result<(), DomError>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError>;

    fn attribute(&self, node: NodeId, name: &str) -> Result<Option<String>, DomError>;

    /// Set one inline style property
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError>;

    fn style(&self, node: NodeId, property: &str) -> Result<Option<String>, DomError>;

    /// Replace the node's content with `text`
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError>;

    /// Bind a listener. A later listener for the same event type replaces the earlier one.
    fn bind(
        &mut self,
        node: NodeId,
        event_type: DomEventType,
        handler: EventHandler,
    ) -> Result<(), DomError>;
}
