//! Aim cursor and target view.
//!
//! The sandbox stands in for a first-person camera with a discrete cursor:
//! a targeted cell plus the face being looked at. Placement lands in the
//! neighbor out of that face.

use axis_lock_core::{TargetSource, TargetedBlock};
use axis_lock_types::{BlockPos, Face};

use crate::store::VoxelWorld;

/// The user's current aim: a targeted cell and the face being pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimCursor {
    target: BlockPos,
    face: Face,
}

impl AimCursor {
    pub fn new(target: BlockPos, face: Face) -> Self {
        Self { target, face }
    }

    pub fn target(&self) -> BlockPos {
        self.target
    }

    pub fn face(&self) -> Face {
        self.face
    }

    /// The cell a placed block would occupy: the neighbor out of the
    /// targeted face.
    pub fn place_pos(&self) -> BlockPos {
        self.target.offset(self.face)
    }

    /// Move the targeted cell one step in the given direction.
    pub fn shift(&mut self, direction: Face) {
        self.target = self.target.offset(direction);
    }

    /// Rotate the aimed face through the fixed face cycle.
    pub fn cycle_face(&mut self) {
        self.face = self.face.next();
    }
}

impl Default for AimCursor {
    fn default() -> Self {
        Self::new(BlockPos::new(0, 0, 0), Face::Up)
    }
}

/// Borrowed view combining world and aim into the core's target query.
pub struct TargetView<'a> {
    world: &'a VoxelWorld,
    aim: &'a AimCursor,
}

impl<'a> TargetView<'a> {
    pub fn new(world: &'a VoxelWorld, aim: &'a AimCursor) -> Self {
        Self { world, aim }
    }
}

impl TargetSource for TargetView<'_> {
    fn targeted_block(&self) -> Option<TargetedBlock> {
        let pos = self.aim.target();
        Some(TargetedBlock {
            pos,
            is_air: self.world.is_air(pos),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::STONE;

    #[test]
    fn test_place_pos_offsets_by_face() {
        let aim = AimCursor::new(BlockPos::new(2, 0, 2), Face::Up);
        assert_eq!(aim.place_pos(), BlockPos::new(2, 1, 2));

        let aim = AimCursor::new(BlockPos::new(2, 0, 2), Face::East);
        assert_eq!(aim.place_pos(), BlockPos::new(3, 0, 2));
    }

    #[test]
    fn test_shift_moves_target() {
        let mut aim = AimCursor::default();
        aim.shift(Face::North);
        aim.shift(Face::North);
        aim.shift(Face::East);
        assert_eq!(aim.target(), BlockPos::new(1, 0, -2));
    }

    #[test]
    fn test_cycle_face_changes_place_pos() {
        let mut aim = AimCursor::new(BlockPos::new(0, 0, 0), Face::Up);
        aim.cycle_face();
        assert_eq!(aim.face(), Face::North);
        assert_eq!(aim.place_pos(), BlockPos::new(0, 0, -1));
    }

    #[test]
    fn test_target_view_reports_occupancy() {
        let mut world = VoxelWorld::new();
        let aim = AimCursor::new(BlockPos::new(0, 0, 0), Face::Up);

        let view = TargetView::new(&world, &aim);
        let target = view.targeted_block().unwrap();
        assert!(target.is_air);

        world.set(BlockPos::new(0, 0, 0), STONE);
        let view = TargetView::new(&world, &aim);
        let target = view.targeted_block().unwrap();
        assert_eq!(target.pos, BlockPos::new(0, 0, 0));
        assert!(!target.is_air);
    }
}
