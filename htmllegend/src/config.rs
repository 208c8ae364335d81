use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::HtmlLegendError;

/// Serializable legend settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LegendConfig {
    /// CSS selector of the element the legend renders into
    #[serde(default)]
    pub container: Option<String>,

    /// Lay items out horizontally instead of vertically
    #[serde(default)]
    pub horizontal: bool,

    /// Maximum number of items to display. None shows every item.
    #[serde(default, deserialize_with = "deserialize_max_items")]
    pub max_items: Option<usize>,

    /// Class applied to every item in place of the default orientation class.
    /// Setting this disables the `selected` class on filtered items.
    #[serde(default)]
    pub legend_item_class: Option<String>,
}

impl LegendConfig {
    pub fn from_json(json: &str) -> Result<Self, HtmlLegendError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn orientation(&self) -> &'static str {
        if self.horizontal {
            "horizontal"
        } else {
            "vertical"
        }
    }

    /// Class given to items when no override class is configured
    pub fn default_item_class(&self) -> String {
        format!("dc-legend-item-{}", self.orientation())
    }
}

/// Interpret an arbitrary value as an item cap.
///
/// Numbers truncate toward zero and negative numbers clamp to zero. Anything that is
/// not a number clears the cap.
pub fn coerce_max_items(value: &Value) -> Option<usize> {
    value.as_f64().map(|n| n.max(0.0).trunc() as usize)
}

fn deserialize_max_items<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_max_items(&value))
}
