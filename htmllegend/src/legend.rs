use std::rc::Rc;

use htmllegend_common::color::is_css_color;
use htmllegend_common::{Legendable, NodeId};
use htmllegend_dom::RenderSurface;
use htmllegend_eventstream::{DomEvent, DomEventType, EventHandler};

use crate::config::{coerce_max_items, LegendConfig};
use crate::error::HtmlLegendError;
use crate::parent::LegendParent;

pub const LEGEND_CLASS: &str = "dc-html-legend";
pub const ITEM_COLOR_CLASS: &str = "dc-legend-item-color";
pub const ITEM_LABEL_CLASS: &str = "dc-legend-item-label";
pub const SELECTED_CLASS: &str = "selected";

/// Maps a legend item and its position to the text shown for it
pub type LegendText = Rc<dyn Fn(&Legendable, usize) -> String>;

pub fn default_legend_text() -> LegendText {
    Rc::new(|item: &Legendable, _index: usize| item.name.clone())
}

/// A legend widget that renders a chart's legendables as HTML elements.
///
/// ```ignore
/// let mut legend = HtmlLegend::new().with_container("#legend").with_horizontal(true);
/// legend.set_parent(chart.clone());
/// legend.render(&mut document)?;
/// ```
pub struct HtmlLegend {
    config: LegendConfig,
    legend_text: LegendText,
    parent: Option<Rc<dyn LegendParent>>,
}

impl HtmlLegend {
    pub fn new() -> Self {
        Self::from_config(LegendConfig::default())
    }

    pub fn from_config(config: LegendConfig) -> Self {
        Self {
            config,
            legend_text: default_legend_text(),
            parent: None,
        }
    }

    pub fn config(&self) -> &LegendConfig {
        &self.config
    }

    pub fn parent(&self) -> Option<&Rc<dyn LegendParent>> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: Rc<dyn LegendParent>) -> &mut Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_parent(mut self, parent: Rc<dyn LegendParent>) -> Self {
        self.set_parent(parent);
        self
    }

    pub fn container(&self) -> Option<&str> {
        self.config.container.as_deref()
    }

    pub fn set_container(&mut self, selector: impl Into<String>) -> &mut Self {
        self.config.container = Some(selector.into());
        self
    }

    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.set_container(selector);
        self
    }

    pub fn legend_item_class(&self) -> Option<&str> {
        self.config.legend_item_class.as_deref()
    }

    pub fn set_legend_item_class(&mut self, class: Option<String>) -> &mut Self {
        self.config.legend_item_class = class;
        self
    }

    pub fn with_legend_item_class(mut self, class: impl Into<String>) -> Self {
        self.set_legend_item_class(Some(class.into()));
        self
    }

    pub fn horizontal(&self) -> bool {
        self.config.horizontal
    }

    /// Lay items out horizontally (true) or vertically (false)
    pub fn set_horizontal(&mut self, horizontal: bool) -> &mut Self {
        self.config.horizontal = horizontal;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.set_horizontal(horizontal);
        self
    }

    pub fn legend_text(&self) -> &LegendText {
        &self.legend_text
    }

    pub fn set_legend_text<F>(&mut self, legend_text: F) -> &mut Self
    where
        F: Fn(&Legendable, usize) -> String + 'static,
    {
        self.legend_text = Rc::new(legend_text);
        self
    }

    pub fn with_legend_text<F>(mut self, legend_text: F) -> Self
    where
        F: Fn(&Legendable, usize) -> String + 'static,
    {
        self.set_legend_text(legend_text);
        self
    }

    pub fn max_items(&self) -> Option<usize> {
        self.config.max_items
    }

    pub fn set_max_items(&mut self, max_items: Option<usize>) -> &mut Self {
        self.config.max_items = max_items;
        self
    }

    /// Set the cap from an untyped value. Non-numeric values clear the cap.
    pub fn set_max_items_value(&mut self, value: &serde_json::Value) -> &mut Self {
        self.config.max_items = coerce_max_items(value);
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.set_max_items(Some(max_items));
        self
    }

    /// Replace any previous legend output in the container with freshly rendered items.
    ///
    /// Returns the legend's root element.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<NodeId, HtmlLegendError> {
        if self.config.container.is_none() {
            return Err(HtmlLegendError::MissingContainer);
        }
        let parent = self.parent.as_ref().ok_or(HtmlLegendError::MissingParent)?;
        render_legend(&self.config, &self.legend_text, parent, surface)
    }
}

impl Default for HtmlLegend {
    fn default() -> Self {
        Self::new()
    }
}

#[tracing::instrument(skip_all)]
pub fn render_legend<S: RenderSurface + ?Sized>(
    config: &LegendConfig,
    legend_text: &LegendText,
    parent: &Rc<dyn LegendParent>,
    surface: &mut S,
) -> Result<NodeId, HtmlLegendError> {
    let selector = config
        .container
        .as_deref()
        .ok_or(HtmlLegendError::MissingContainer)?;
    let container = surface
        .select(selector)?
        .ok_or_else(|| HtmlLegendError::ContainerNotFound(selector.to_string()))?;

    // Matches come in document order, so a nested legend is already detached with its ancestor
    for previous in surface.select_all(container, &format!("div.{LEGEND_CLASS}"))? {
        if surface.contains(previous) {
            surface.remove(previous)?;
        }
    }

    let root = surface.append_child(container, "div")?;
    surface.set_attribute(root, "class", LEGEND_CLASS)?;
    let width = surface.style(container, "width")?.unwrap_or_default();
    surface.set_attribute(root, "style", &format!("max-width:{width}"))?;

    let mut legendables = parent.legendables();
    if let Some(max_items) = config.max_items {
        legendables.truncate(max_items);
    }
    let filters = parent.filters();

    let default_class = config.default_item_class();
    tracing::debug!(
        items = legendables.len(),
        filters = filters.len(),
        container = selector,
        "rendering legend"
    );

    for (index, item) in legendables.iter().enumerate() {
        let class = match &config.legend_item_class {
            Some(class) => class.clone(),
            None if filters.contains(&item.name) => format!("{default_class} {SELECTED_CLASS}"),
            None => default_class.clone(),
        };

        let node = surface.append_child(root, "div")?;
        surface.set_attribute(node, "class", &class)?;
        surface.bind(
            node,
            DomEventType::MouseOver,
            parent_handler(parent, item, |p, item| p.legend_highlight(item)),
        )?;
        surface.bind(
            node,
            DomEventType::MouseOut,
            parent_handler(parent, item, |p, item| p.legend_reset(item)),
        )?;
        surface.bind(
            node,
            DomEventType::Click,
            parent_handler(parent, item, |p, item| p.legend_toggle(item)),
        )?;

        if !is_css_color(&item.color) {
            tracing::warn!(name = %item.name, color = %item.color, "legend item color is not a valid CSS color");
        }
        let swatch = surface.append_child(node, "span")?;
        surface.set_attribute(swatch, "class", ITEM_COLOR_CLASS)?;
        surface.set_style(swatch, "background-color", &item.color)?;

        let text = legend_text(item, index);
        let label = surface.append_child(node, "span")?;
        surface.set_attribute(label, "class", ITEM_LABEL_CLASS)?;
        surface.set_attribute(label, "title", &text)?;
        surface.set_text(label, &text)?;
    }

    Ok(root)
}

fn parent_handler<F>(parent: &Rc<dyn LegendParent>, item: &Legendable, callback: F) -> EventHandler
where
    F: Fn(&dyn LegendParent, &Legendable) + 'static,
{
    let parent = parent.clone();
    let item = item.clone();
    Rc::new(move |_event: &DomEvent| callback(parent.as_ref(), &item))
}
