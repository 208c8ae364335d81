pub mod document;
pub mod error;
pub mod selector;
pub mod surface;

pub use document::MemoryDocument;
pub use error::DomError;
pub use selector::Selector;
pub use surface::RenderSurface;
