use htmllegend_common::Legendable;

/// The capabilities a chart exposes to an attached legend
pub trait LegendParent {
    /// Items to display, in display order
    fn legendables(&self) -> Vec<Legendable>;

    /// Currently active filter values, matched against item names
    fn filters(&self) -> Vec<String>;

    /// Cursor entered the legend item for `item`
    fn legend_highlight(&self, item: &Legendable);

    /// Cursor left the legend item for `item`
    fn legend_reset(&self, item: &Legendable);

    /// Legend item for `item` was clicked
    fn legend_toggle(&self, item: &Legendable);
}
