use std::str::FromStr;

use htmllegend_common::NodeId;

use crate::error::DomError;

/// Read access to the element tree needed for selector matching
pub trait ElementTree {
    fn tag_name(&self, node: NodeId) -> Option<&str>;
    fn id_attribute(&self, node: NodeId) -> Option<&str>;
    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn parent_node(&self, node: NodeId) -> Option<NodeId>;
}

/// A single compound selector such as `div#main.dc-legend-item.selected`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    /// None matches any tag
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl CompoundSelector {
    pub fn matches<T: ElementTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        let Some(tag) = tree.tag_name(node) else {
            return false;
        };
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if tree.id_attribute(node) != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| tree.has_class(node, class))
    }
}

/// Compound selectors joined by descendant combinators
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
}

impl ComplexSelector {
    pub fn matches<T: ElementTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        let Some((last, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(tree, node) {
            return false;
        }

        // Descendant combinators only, so matching the nearest ancestor greedily is sufficient
        let mut current = tree.parent_node(node);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = tree.parent_node(candidate);
                if compound.matches(tree, candidate) {
                    break;
                }
            }
        }
        true
    }
}

/// A comma separated selector group
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub alternatives: Vec<ComplexSelector>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = || DomError::InvalidSelector(input.to_string());

        let mut alternatives = Vec::new();
        for group in input.split(',') {
            let compounds = group
                .split_whitespace()
                .map(|part| parse_compound(part).ok_or_else(invalid))
                .collect::<Result<Vec<_>, _>>()?;
            if compounds.is_empty() {
                return Err(invalid());
            }
            alternatives.push(ComplexSelector { compounds });
        }
        Ok(Self { alternatives })
    }

    pub fn matches<T: ElementTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        self.alternatives
            .iter()
            .any(|alternative| alternative.matches(tree, node))
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(input: &str) -> (&str, &str) {
    let end = input
        .char_indices()
        .find(|(_, c)| !is_ident_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(input.len());
    input.split_at(end)
}

fn parse_compound(input: &str) -> Option<CompoundSelector> {
    let mut compound = CompoundSelector::default();
    let mut rest = input;

    if let Some(after) = rest.strip_prefix('*') {
        rest = after;
    } else {
        let (tag, after) = take_ident(rest);
        if !tag.is_empty() {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
        rest = after;
    }

    while let Some(marker) = rest.chars().next() {
        let (name, after) = take_ident(&rest[marker.len_utf8()..]);
        if name.is_empty() {
            return None;
        }
        match marker {
            '.' => compound.classes.push(name.to_string()),
            '#' if compound.id.is_none() => compound.id = Some(name.to_string()),
            _ => return None,
        }
        rest = after;
    }

    Some(compound)
}
