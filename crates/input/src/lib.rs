//! Terminal input glue: key mapping and per-tick frame assembly.
//!
//! Raw crossterm key events become logical [`InputAction`]s, and a
//! [`FrameBuilder`] turns those into one debounced [`InputFrame`] per tick
//! for the core reducer. Edge and level inputs stay separate all the way
//! through.
//!
//! [`InputFrame`]: axis_lock_types::InputFrame

pub mod frame;
pub mod map;

pub use frame::FrameBuilder;
pub use map::{handle_key_event, should_quit, InputAction};
