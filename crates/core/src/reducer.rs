//! Per-tick input event reducer.
//!
//! Consumes one [`InputFrame`] per tick and advances the [`LockSession`]:
//! activation mode, selected axis, reference point, and sequence liveness.
//! The steps run in a fixed order because later steps read state mutated by
//! earlier ones; do not reorder them.

use arrayvec::ArrayVec;

use axis_lock_types::{Axis, InputFrame, Notification};

use crate::session::LockSession;
use crate::target::TargetSource;

/// Maximum notifications a single tick can carry. Ticks that coalesce more
/// edge events than this still apply every state transition; the excess
/// notifications are dropped.
pub const NOTIFY_CAP: usize = 16;

/// Notifications emitted by one reducer tick, in emission order.
pub type Notifications = ArrayVec<Notification, NOTIFY_CAP>;

/// Advance the session by one tick of input.
///
/// Processing order:
///
/// 1. hold-key edge detection
/// 2. toggle presses (suppressed entirely while the hold key is down)
/// 3. cycle-axis presses
/// 4. sequence liveness (lock inactive or place key released ends the run)
/// 5. direct axis selection (fixed X, Y, Z tie-break; first wins)
/// 6. reference-point toggle (exclusive: a clear ends the tick)
pub fn tick(
    session: &mut LockSession,
    frame: &InputFrame,
    targets: &impl TargetSource,
) -> Notifications {
    let mut notes = Notifications::new();

    // 1. Hold-key edges. The edge message always fires on a transition,
    // independent of whatever the toggle does this tick.
    let was_held = session.hold_key_down();
    session.set_hold_key_down(frame.hold_down);
    if frame.hold_down && !was_held {
        let _ = notes.try_push(Notification::HoldEnabled(session.selected_axis()));
    } else if !frame.hold_down && was_held {
        let _ = notes.try_push(Notification::HoldDisabled);
        // Releasing hold must not disturb an independently-toggled-on lock.
        if !session.toggle_enabled() {
            session.clear_sequence();
        }
    }

    // 2. Toggle presses. Hold takes exclusive priority: presses made while
    // the hold key is down are ignored, not queued.
    if !frame.hold_down {
        for _ in 0..frame.toggle_presses {
            if session.flip_toggle() {
                let _ = notes.try_push(Notification::ToggleEnabled(session.selected_axis()));
            } else {
                let _ = notes.try_push(Notification::ToggleDisabled);
                session.clear_sequence();
            }
        }
    }

    let effective_active = session.effective_active();

    // 3. Cycle-axis presses. Changing axis mid-run invalidates the anchor.
    for _ in 0..frame.cycle_presses {
        let axis = session.cycle_axis();
        let _ = notes.try_push(Notification::AxisCycled(axis));
        if effective_active && session.sequence_active() {
            session.clear_sequence();
        }
    }

    // 4. Sequence liveness: a run survives only while the lock stays
    // active and the user keeps the place key held.
    if session.sequence_active() && (!effective_active || !frame.place_down) {
        session.clear_sequence();
    }

    // 5. Direct axis selection. At most one applies per tick; simultaneous
    // presses resolve in the fixed order X, Y, Z, first match wins.
    let direct = if frame.select_x {
        Some(Axis::X)
    } else if frame.select_y {
        Some(Axis::Y)
    } else if frame.select_z {
        Some(Axis::Z)
    } else {
        None
    };
    if let Some(axis) = direct {
        session.select_axis(axis);
        let _ = notes.try_push(Notification::AxisSelected(axis));
        if effective_active && session.sequence_active() {
            session.clear_sequence();
        }
    }

    // 6. Reference-point toggle.
    if frame.set_reference_pressed {
        if session.manual_reference().is_some() {
            session.clear_manual_reference();
            session.clear_sequence();
            let _ = notes.try_push(Notification::ReferenceCleared);
            // A clear is exclusive: nothing else runs this tick.
            return notes;
        }
        match targets.targeted_block() {
            Some(target) if !target.is_air => {
                session.set_manual_reference(target.pos);
                let _ = notes.try_push(Notification::ReferenceSet(target.pos));
            }
            _ => {
                let _ = notes.try_push(Notification::ReferenceUnavailable);
            }
        }
    }

    notes
}
