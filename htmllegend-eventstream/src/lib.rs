pub mod event;
pub mod manager;
pub mod pointer;

pub use event::{DomEvent, DomEventType, EventHandler, EventTarget};
pub use manager::EventStreamManager;
pub use pointer::{MouseButton, PointerEvent};
