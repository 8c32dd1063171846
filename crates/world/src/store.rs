//! Sparse in-memory block store.
//!
//! A cell either holds a block id or is air. Out-of-store cells are simply
//! air; the grid is unbounded.

use std::collections::HashMap;

use axis_lock_types::BlockPos;

/// Numeric block identifier.
pub type BlockId = u16;

/// Block id used for the seeded ground plane.
pub const STONE: BlockId = 1;

/// Unbounded voxel grid backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct VoxelWorld {
    blocks: HashMap<BlockPos, BlockId>,
}

impl VoxelWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world seeded with a square floor of `STONE` at height `y`,
    /// spanning `[-radius, radius]` on both horizontal axes.
    pub fn with_floor(y: i32, radius: i32) -> Self {
        let mut world = Self::new();
        for x in -radius..=radius {
            for z in -radius..=radius {
                world.set(BlockPos::new(x, y, z), STONE);
            }
        }
        world
    }

    /// Put a block at `pos`, replacing whatever was there.
    pub fn set(&mut self, pos: BlockPos, id: BlockId) {
        self.blocks.insert(pos, id);
    }

    /// Remove the block at `pos`, returning its id if one was present.
    pub fn clear(&mut self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.remove(&pos)
    }

    /// Block id at `pos`, or `None` for air.
    pub fn get(&self, pos: BlockPos) -> Option<BlockId> {
        self.blocks.get(&pos).copied()
    }

    pub fn is_air(&self, pos: BlockPos) -> bool {
        !self.blocks.contains_key(&pos)
    }

    pub fn is_occupied(&self, pos: BlockPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Number of placed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
