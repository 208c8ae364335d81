use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::parse_css_color;

/// A named, colored entry that a chart exposes for display in a legend.
///
/// Only `name` and `color` are interpreted by the legend. Any other fields the
/// chart attaches (for example the group's aggregated `data`) are kept in
/// `extra` so that custom legend text functions can read them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legendable {
    pub name: String,
    pub color: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Legendable {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Color as normalized RGBA, or None if `color` is not a valid CSS color
    pub fn rgba(&self) -> Option<[f32; 4]> {
        parse_css_color(&self.color)
    }
}
