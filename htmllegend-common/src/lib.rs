pub mod color;
pub mod node;
pub mod types;

pub use node::NodeId;
pub use types::Legendable;
