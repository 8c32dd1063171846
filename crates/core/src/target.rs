//! World-oracle seam.
//!
//! The only thing the core ever asks the world is "which block is the user
//! aiming at, and is it empty?" — used when the reference-point key is
//! pressed. Hosts implement [`TargetSource`] over whatever raycasting or
//! cursor model they have.

use axis_lock_types::BlockPos;

/// The block currently under the user's aim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetedBlock {
    pub pos: BlockPos,
    /// True when the targeted cell holds no block. An air cell cannot
    /// become a reference point.
    pub is_air: bool,
}

/// Read-only query for the user's current aim target.
pub trait TargetSource {
    /// The targeted block, or `None` when nothing is in range.
    fn targeted_block(&self) -> Option<TargetedBlock>;
}

/// A source that never targets anything. Handy for hosts (and tests) that
/// tick the reducer without a world attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTarget;

impl TargetSource for NoTarget {
    fn targeted_block(&self) -> Option<TargetedBlock> {
        None
    }
}
