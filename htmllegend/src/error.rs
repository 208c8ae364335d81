use htmllegend_dom::DomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HtmlLegendError {
    #[error("Legend container must be set before rendering")]
    MissingContainer,

    #[error("Legend parent chart must be set before rendering")]
    MissingParent,

    #[error("Legend container `{0}` does not match any element")]
    ContainerNotFound(String),

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("Invalid legend configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
