pub mod pointer;
pub mod resize;
pub mod select;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use resize::{observe_track, wire_resize, TrackObserver};
pub use select::wire_item_select;
