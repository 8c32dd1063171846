//! Sandbox engine: composes the lock core with a world and an aim cursor.
//!
//! The [`Sandbox`] owns everything a single-player host needs: the
//! [`LockSession`], a [`VoxelWorld`], the [`AimCursor`], the held item,
//! and the actor's mode. The binary (and the end-to-end tests) drive it
//! through two entry points: [`Sandbox::tick`] once per timestep and
//! [`Sandbox::try_place`] once per placement attempt.

use axis_lock_core::{evaluate, tick, LockSession, Notifications, PlacementRequest};
use axis_lock_types::{BlockPos, Face, InputFrame};
use axis_lock_world::{AimCursor, BlockId, TargetView, VoxelWorld, STONE};

/// What the actor is holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldItem {
    /// A placeable block with the given id.
    Block(BlockId),
    /// Nothing placeable; placement attempts pass through the filter and
    /// then do nothing.
    Empty,
}

/// Result of one placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The filter accepted and a block was written to the world.
    Placed(BlockPos),
    /// The filter rejected: the attempt broke the locked-axis constraint.
    Blocked(BlockPos),
    /// The target cell already holds a block.
    Obstructed(BlockPos),
    /// Accepted but nothing happened (empty hand or spectator).
    NoEffect,
}

/// A single-player sandbox world with the axis-lock filter wired in.
#[derive(Debug, Clone)]
pub struct Sandbox {
    session: LockSession,
    world: VoxelWorld,
    aim: AimCursor,
    held_item: HeldItem,
    spectator: bool,
}

impl Sandbox {
    /// Ground-floor radius of the default world.
    pub const FLOOR_RADIUS: i32 = 8;

    /// A sandbox with a stone floor at y = 0, the aim on its center cell,
    /// and a block in hand.
    pub fn new() -> Self {
        Self {
            session: LockSession::new(),
            world: VoxelWorld::with_floor(0, Self::FLOOR_RADIUS),
            aim: AimCursor::new(BlockPos::new(0, 0, 0), Face::Up),
            held_item: HeldItem::Block(STONE),
            spectator: false,
        }
    }

    pub fn session(&self) -> &LockSession {
        &self.session
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn aim(&self) -> &AimCursor {
        &self.aim
    }

    pub fn held_item(&self) -> HeldItem {
        self.held_item
    }

    pub fn set_held_item(&mut self, item: HeldItem) {
        self.held_item = item;
    }

    pub fn spectator(&self) -> bool {
        self.spectator
    }

    pub fn set_spectator(&mut self, spectator: bool) {
        self.spectator = spectator;
    }

    /// Move the aim cursor one cell.
    pub fn move_aim(&mut self, direction: Face) {
        self.aim.shift(direction);
    }

    /// Rotate the aimed face.
    pub fn cycle_aim_face(&mut self) {
        self.aim.cycle_face();
    }

    /// Advance the lock state machine by one tick of input.
    pub fn tick(&mut self, frame: &InputFrame) -> Notifications {
        let targets = TargetView::new(&self.world, &self.aim);
        tick(&mut self.session, frame, &targets)
    }

    /// Attempt to place the held block at the aimed face.
    ///
    /// The lock filter is consulted first; on acceptance the engine
    /// applies the ordinary placement rules (cell must be empty, hand must
    /// hold a block, spectators never build).
    pub fn try_place(&mut self) -> PlaceOutcome {
        let place_pos = self.aim.place_pos();
        let request = PlacementRequest {
            place_pos,
            item_is_block: matches!(self.held_item, HeldItem::Block(_)),
            actor_is_spectator: self.spectator,
            is_authoritative: true,
        };

        if !evaluate(&mut self.session, &request).is_accept() {
            return PlaceOutcome::Blocked(place_pos);
        }

        let HeldItem::Block(id) = self.held_item else {
            return PlaceOutcome::NoEffect;
        };
        if self.spectator {
            return PlaceOutcome::NoEffect;
        }
        if self.world.is_occupied(place_pos) {
            return PlaceOutcome::Obstructed(place_pos);
        }

        self.world.set(place_pos, id);
        PlaceOutcome::Placed(place_pos)
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axis_lock_types::{Axis, Notification};

    fn toggle_on(sandbox: &mut Sandbox) {
        let frame = InputFrame {
            toggle_presses: 1,
            ..InputFrame::default()
        };
        let notes = sandbox.tick(&frame);
        assert_eq!(
            notes.as_slice(),
            &[Notification::ToggleEnabled(Axis::Y)]
        );
    }

    #[test]
    fn test_place_on_floor() {
        let mut sandbox = Sandbox::new();

        let outcome = sandbox.try_place();

        assert_eq!(outcome, PlaceOutcome::Placed(BlockPos::new(0, 1, 0)));
        assert!(sandbox.world().is_occupied(BlockPos::new(0, 1, 0)));
    }

    #[test]
    fn test_lock_rejects_off_axis_placement() {
        let mut sandbox = Sandbox::new();
        toggle_on(&mut sandbox);

        // Anchor at (0, 1, 0); Y is locked.
        assert_eq!(
            sandbox.try_place(),
            PlaceOutcome::Placed(BlockPos::new(0, 1, 0))
        );

        // Aim at the block just placed: place_pos is now (0, 2, 0).
        sandbox.move_aim(Face::Up);
        assert_eq!(
            sandbox.try_place(),
            PlaceOutcome::Blocked(BlockPos::new(0, 2, 0))
        );

        // Same layer one cell east: accepted.
        sandbox.move_aim(Face::Down);
        sandbox.move_aim(Face::East);
        assert_eq!(
            sandbox.try_place(),
            PlaceOutcome::Placed(BlockPos::new(1, 1, 0))
        );
    }

    #[test]
    fn test_occupied_cell_obstructs() {
        let mut sandbox = Sandbox::new();
        assert_eq!(
            sandbox.try_place(),
            PlaceOutcome::Placed(BlockPos::new(0, 1, 0))
        );
        // Same aim again: the cell is taken now.
        assert_eq!(
            sandbox.try_place(),
            PlaceOutcome::Obstructed(BlockPos::new(0, 1, 0))
        );
    }

    #[test]
    fn test_empty_hand_places_nothing() {
        let mut sandbox = Sandbox::new();
        sandbox.set_held_item(HeldItem::Empty);
        toggle_on(&mut sandbox);

        assert_eq!(sandbox.try_place(), PlaceOutcome::NoEffect);
        // Pass-through must not have anchored a sequence.
        assert!(!sandbox.session().sequence_active());
    }

    #[test]
    fn test_spectator_places_nothing() {
        let mut sandbox = Sandbox::new();
        sandbox.set_spectator(true);
        toggle_on(&mut sandbox);

        assert_eq!(sandbox.try_place(), PlaceOutcome::NoEffect);
        assert!(!sandbox.session().sequence_active());
    }

    #[test]
    fn test_reference_point_captured_from_aimed_block() {
        let mut sandbox = Sandbox::new();

        // Aiming at the floor center, which is solid.
        let frame = InputFrame {
            set_reference_pressed: true,
            ..InputFrame::default()
        };
        let notes = sandbox.tick(&frame);

        assert_eq!(
            notes.as_slice(),
            &[Notification::ReferenceSet(BlockPos::new(0, 0, 0))]
        );
        assert_eq!(
            sandbox.session().manual_reference(),
            Some(BlockPos::new(0, 0, 0))
        );
    }

    #[test]
    fn test_reference_point_unavailable_in_the_air() {
        let mut sandbox = Sandbox::new();
        for _ in 0..3 {
            sandbox.move_aim(Face::Up);
        }

        let frame = InputFrame {
            set_reference_pressed: true,
            ..InputFrame::default()
        };
        let notes = sandbox.tick(&frame);

        assert_eq!(notes.as_slice(), &[Notification::ReferenceUnavailable]);
        assert!(sandbox.session().manual_reference().is_none());
    }
}
