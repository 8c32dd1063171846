//! Lock session state.
//!
//! One `LockSession` holds everything the reducer and validator read or
//! write: activation mode, selected axis, the implicit sequence anchor, and
//! the optional manual reference point. The session is plain owned state;
//! callers decide its lifetime and pass it by reference into the tick and
//! evaluation functions.

use axis_lock_types::{Axis, BlockPos};

/// Mutable state of the axis-lock feature.
///
/// Two invariants hold at every public API boundary:
///
/// - the sequence flag and anchor are set and cleared together
///   (`sequence_active() == sequence_anchor().is_some()`);
/// - setting a manual reference point clears any in-flight sequence, so a
///   stale anchor can never leak into validation once the override exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockSession {
    selected_axis: Axis,
    toggle_enabled: bool,
    hold_key_down: bool,
    sequence_active: bool,
    sequence_anchor: Option<BlockPos>,
    manual_reference: Option<BlockPos>,
}

impl LockSession {
    /// Create a session with the startup defaults: Y axis selected, lock
    /// off, no sequence, no reference point.
    pub fn new() -> Self {
        Self {
            selected_axis: Axis::Y,
            toggle_enabled: false,
            hold_key_down: false,
            sequence_active: false,
            sequence_anchor: None,
            manual_reference: None,
        }
    }

    pub fn selected_axis(&self) -> Axis {
        self.selected_axis
    }

    pub fn toggle_enabled(&self) -> bool {
        self.toggle_enabled
    }

    pub fn hold_key_down(&self) -> bool {
        self.hold_key_down
    }

    pub fn sequence_active(&self) -> bool {
        self.sequence_active
    }

    pub fn sequence_anchor(&self) -> Option<BlockPos> {
        self.sequence_anchor
    }

    pub fn manual_reference(&self) -> Option<BlockPos> {
        self.manual_reference
    }

    /// Whether the lock constrains placements right now, by toggle or hold.
    pub fn effective_active(&self) -> bool {
        self.toggle_enabled || self.hold_key_down
    }

    pub(crate) fn set_hold_key_down(&mut self, down: bool) {
        self.hold_key_down = down;
    }

    /// Flip the sticky toggle and return the new value.
    pub(crate) fn flip_toggle(&mut self) -> bool {
        self.toggle_enabled = !self.toggle_enabled;
        self.toggle_enabled
    }

    /// Advance the selected axis to its cyclic successor and return it.
    pub(crate) fn cycle_axis(&mut self) -> Axis {
        self.selected_axis = self.selected_axis.next();
        self.selected_axis
    }

    pub(crate) fn select_axis(&mut self, axis: Axis) {
        self.selected_axis = axis;
    }

    /// Establish the anchor for a new placement run.
    pub(crate) fn begin_sequence(&mut self, anchor: BlockPos) {
        self.sequence_active = true;
        self.sequence_anchor = Some(anchor);
    }

    /// Drop the sequence flag and anchor together.
    pub(crate) fn clear_sequence(&mut self) {
        self.sequence_active = false;
        self.sequence_anchor = None;
    }

    /// Install a manual reference point. Any in-flight sequence is cleared
    /// so it cannot carry over once the override is removed.
    pub(crate) fn set_manual_reference(&mut self, pos: BlockPos) {
        self.manual_reference = Some(pos);
        self.clear_sequence();
    }

    pub(crate) fn clear_manual_reference(&mut self) {
        self.manual_reference = None;
    }

    /// Force the sequence flag on without an anchor, breaking the paired
    /// invariant. Only for exercising the validator's recovery path.
    #[cfg(test)]
    pub(crate) fn force_inconsistent_sequence(&mut self) {
        self.sequence_active = true;
        self.sequence_anchor = None;
    }
}

impl Default for LockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = LockSession::new();
        assert_eq!(session.selected_axis(), Axis::Y);
        assert!(!session.toggle_enabled());
        assert!(!session.hold_key_down());
        assert!(!session.sequence_active());
        assert!(session.sequence_anchor().is_none());
        assert!(session.manual_reference().is_none());
        assert!(!session.effective_active());
    }

    #[test]
    fn test_effective_active_from_either_source() {
        let mut session = LockSession::new();

        session.flip_toggle();
        assert!(session.effective_active());

        session.flip_toggle();
        assert!(!session.effective_active());

        session.set_hold_key_down(true);
        assert!(session.effective_active());
    }

    #[test]
    fn test_sequence_flag_and_anchor_move_together() {
        let mut session = LockSession::new();

        session.begin_sequence(BlockPos::new(1, 2, 3));
        assert!(session.sequence_active());
        assert_eq!(session.sequence_anchor(), Some(BlockPos::new(1, 2, 3)));

        session.clear_sequence();
        assert!(!session.sequence_active());
        assert!(session.sequence_anchor().is_none());
    }

    #[test]
    fn test_setting_reference_clears_sequence() {
        let mut session = LockSession::new();
        session.begin_sequence(BlockPos::new(0, 0, 0));

        session.set_manual_reference(BlockPos::new(5, 5, 5));

        assert_eq!(session.manual_reference(), Some(BlockPos::new(5, 5, 5)));
        assert!(!session.sequence_active());
        assert!(session.sequence_anchor().is_none());
    }

    #[test]
    fn test_clearing_reference_leaves_sequence_untouched() {
        let mut session = LockSession::new();
        session.set_manual_reference(BlockPos::new(5, 5, 5));

        session.clear_manual_reference();
        assert!(session.manual_reference().is_none());
        assert!(!session.sequence_active());
    }

    #[test]
    fn test_cycle_axis_advances_selection() {
        let mut session = LockSession::new();
        assert_eq!(session.cycle_axis(), Axis::Z);
        assert_eq!(session.cycle_axis(), Axis::X);
        assert_eq!(session.cycle_axis(), Axis::Y);
    }
}
