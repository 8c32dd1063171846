//! Axis-locked block placement (workspace facade crate).
//!
//! This package keeps the `axis_lock::{core,engine,input,types,world}`
//! public API in one place while the implementation lives in dedicated
//! crates under `crates/`.

pub use axis_lock_core as core;
pub use axis_lock_engine as engine;
pub use axis_lock_input as input;
pub use axis_lock_types as types;
pub use axis_lock_world as world;
