pub mod config;
pub mod error;
pub mod legend;
pub mod parent;

pub use config::LegendConfig;
pub use error::HtmlLegendError;
pub use legend::{default_legend_text, render_legend, HtmlLegend, LegendText};
pub use parent::LegendParent;

pub use htmllegend_common::Legendable;
