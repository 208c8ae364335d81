use htmllegend_common::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("Unknown or detached node: {0}")]
    UnknownNode(NodeId),

    #[error("Invalid selector: `{0}`")]
    InvalidSelector(String),
}
