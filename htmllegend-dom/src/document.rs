use htmllegend_common::NodeId;
use htmllegend_eventstream::{DomEvent, DomEventType, EventHandler, EventTarget};
use indexmap::IndexMap;

use crate::error::DomError;
use crate::selector::{ElementTree, Selector};
use crate::surface::RenderSurface;

struct Element {
    tag: String,
    // Everything except `style`, which lives in `styles`
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listeners: IndexMap<DomEventType, EventHandler>,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: IndexMap::new(),
            styles: IndexMap::new(),
            text: None,
            parent,
            children: Vec::new(),
            listeners: IndexMap::new(),
        }
    }

    fn style_attribute(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        let declarations = self
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>();
        Some(declarations.join(" "))
    }
}

/// An in-memory HTML document that widgets can render into without a browser.
///
/// Nodes are addressed by [`NodeId`]. Removing a node detaches its whole subtree, and
/// any later operation on a detached node fails with [`DomError::UnknownNode`].
pub struct MemoryDocument {
    nodes: Vec<Option<Element>>,
    root: NodeId,
    body: NodeId,
}

impl MemoryDocument {
    /// Create a document holding an empty `<html><body></body></html>` tree
    pub fn new() -> Self {
        let root = NodeId(0);
        let body = NodeId(1);
        let mut html = Element::new("html", None);
        html.children.push(body);
        Self {
            nodes: vec![Some(html), Some(Element::new("body", Some(root)))],
            root,
            body,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn element(&self, node: NodeId) -> Result<&Element, DomError> {
        self.nodes
            .get(node.index())
            .and_then(Option::as_ref)
            .ok_or(DomError::UnknownNode(node))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element, DomError> {
        self.nodes
            .get_mut(node.index())
            .and_then(Option::as_mut)
            .ok_or(DomError::UnknownNode(node))
    }

    pub fn tag(&self, node: NodeId) -> Result<&str, DomError> {
        Ok(self.element(node)?.tag.as_str())
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId], DomError> {
        Ok(self.element(node)?.children.as_slice())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, DomError> {
        Ok(self.element(node)?.parent)
    }

    pub fn text(&self, node: NodeId) -> Result<Option<&str>, DomError> {
        Ok(self.element(node)?.text.as_deref())
    }

    pub fn classes(&self, node: NodeId) -> Result<Vec<&str>, DomError> {
        Ok(self
            .element(node)?
            .attributes
            .get("class")
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default())
    }

    pub fn has_listener(&self, node: NodeId, event_type: DomEventType) -> Result<bool, DomError> {
        Ok(self.element(node)?.listeners.contains_key(&event_type))
    }

    /// Listeners that `event` reaches, target first and then each ancestor.
    ///
    /// Callers that share the document behind a `RefCell` can collect the handlers,
    /// release the borrow and then invoke them, so that handlers may re-render.
    pub fn handlers_for(&self, event: &DomEvent) -> Vec<EventHandler> {
        let mut handlers = Vec::new();
        let mut current = Some(event.target);
        while let Some(node) = current {
            let Ok(element) = self.element(node) else {
                break;
            };
            if let Some(handler) = element.listeners.get(&event.event_type) {
                handlers.push(handler.clone());
            }
            current = element.parent;
        }
        handlers
    }

    fn descendants(&self, scope: NodeId) -> Result<Vec<NodeId>, DomError> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.element(scope)?.children.iter().rev().cloned().collect();
        while let Some(node) = stack.pop() {
            result.push(node);
            stack.extend(self.element(node)?.children.iter().rev().cloned());
        }
        Ok(result)
    }

    fn detach_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(element) = self.nodes.get_mut(current.index()).and_then(Option::take) {
                stack.extend(element.children);
            }
        }
    }

    /// Serialize `node` and its subtree as HTML
    pub fn to_html(&self, node: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        self.write_html(node, &mut out)?;
        Ok(out)
    }

    fn write_html(&self, node: NodeId, out: &mut String) -> Result<(), DomError> {
        let element = self.element(node)?;
        out.push('<');
        out.push_str(&element.tag);
        let style = element.style_attribute();
        let attributes = element
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .chain(style.as_deref().map(|style| ("style", style)));
        for (name, value) in attributes {
            out.push_str(&format!(" {}=\"{}\"", name, htmlize::escape_attribute(value)));
        }
        out.push('>');
        if let Some(text) = &element.text {
            out.push_str(&htmlize::escape_text(text.as_str()));
        }
        for child in &element.children {
            self.write_html(*child, out)?;
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
        Ok(())
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree for MemoryDocument {
    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).ok().map(|element| element.tag.as_str())
    }

    fn id_attribute(&self, node: NodeId) -> Option<&str> {
        self.element(node)
            .ok()
            .and_then(|element| element.attributes.get("id"))
            .map(String::as_str)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node)
            .map(|classes| classes.contains(&class))
            .unwrap_or(false)
    }

    fn parent_node(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).ok().and_then(|element| element.parent)
    }
}

impl RenderSurface for MemoryDocument {
    fn contains(&self, node: NodeId) -> bool {
        self.element(node).is_ok()
    }

    fn select(&self, selector: &str) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        let mut candidates = vec![self.root];
        candidates.extend(self.descendants(self.root)?);
        Ok(candidates
            .into_iter()
            .find(|node| selector.matches(self, *node)))
    }

    fn select_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .descendants(scope)?
            .into_iter()
            .filter(|node| selector.matches(self, *node))
            .collect())
    }

    fn append_child(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        // Validate before allocating so a failed append leaves no orphan
        self.element(parent)?;
        let node = NodeId(self.nodes.len());
        self.nodes.push(Some(Element::new(tag, Some(parent))));
        self.element_mut(parent)?.children.push(node);
        Ok(node)
    }

    fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        let parent = self.element(node)?.parent;
        if let Some(parent) = parent {
            self.element_mut(parent)?.children.retain(|child| *child != node);
        }
        self.detach_subtree(node);
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        if name.eq_ignore_ascii_case("style") {
            element.styles.clear();
            for declaration in value.split(';') {
                let Some((property, value)) = declaration.split_once(':') else {
                    continue;
                };
                let (property, value) = (property.trim(), value.trim());
                // Browsers drop declarations with an empty property or value
                if !property.is_empty() && !value.is_empty() {
                    element
                        .styles
                        .insert(property.to_ascii_lowercase(), value.to_string());
                }
            }
        } else {
            element
                .attributes
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
        Ok(())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Result<Option<String>, DomError> {
        let element = self.element(node)?;
        if name.eq_ignore_ascii_case("style") {
            Ok(element.style_attribute())
        } else {
            Ok(element.attributes.get(&name.to_ascii_lowercase()).cloned())
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let element = self.element_mut(node)?;
        let property = property.trim().to_ascii_lowercase();
        if value.trim().is_empty() {
            element.styles.shift_remove(&property);
        } else {
            element.styles.insert(property, value.trim().to_string());
        }
        Ok(())
    }

    fn style(&self, node: NodeId, property: &str) -> Result<Option<String>, DomError> {
        Ok(self
            .element(node)?
            .styles
            .get(&property.trim().to_ascii_lowercase())
            .cloned())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        let children = std::mem::take(&mut self.element_mut(node)?.children);
        for child in children {
            self.detach_subtree(child);
        }
        self.element_mut(node)?.text = Some(text.to_string());
        Ok(())
    }

    fn bind(
        &mut self,
        node: NodeId,
        event_type: DomEventType,
        handler: EventHandler,
    ) -> Result<(), DomError> {
        self.element_mut(node)?.listeners.insert(event_type, handler);
        Ok(())
    }
}

impl EventTarget for MemoryDocument {
    fn dispatch_event(&mut self, event: &DomEvent) {
        for handler in self.handlers_for(event) {
            handler(event);
        }
    }
}
