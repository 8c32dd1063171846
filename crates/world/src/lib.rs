//! In-memory voxel world and aim model for the sandbox.
//!
//! Implements the core's [`TargetSource`] seam over a sparse block store
//! and a discrete aim cursor.
//!
//! [`TargetSource`]: axis_lock_core::TargetSource

pub mod aim;
pub mod store;

pub use aim::{AimCursor, TargetView};
pub use store::{BlockId, VoxelWorld, STONE};
