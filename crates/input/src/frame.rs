//! Per-tick input frame assembly.
//!
//! Collects key events between ticks and drains them into one
//! [`InputFrame`]. Edge actions accumulate as counts; level actions track
//! the last time the key was seen and auto-release after a timeout, which
//! makes hold-to-lock usable in terminals that never emit key releases.

use std::time::Instant;

use axis_lock_types::InputFrame;

use crate::map::InputAction;

// In terminals without key-release events, a short timeout prevents a
// single tap from turning into a sustained "held" state; terminal
// auto-repeat keeps refreshing the timestamp while the key stays down.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Accumulates logical input between ticks and produces one frame per tick.
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    toggle_presses: u8,
    cycle_presses: u8,
    select_x: bool,
    select_y: bool,
    select_z: bool,
    set_reference: bool,
    hold_seen: Option<Instant>,
    place_seen: Option<Instant>,
    key_release_timeout_ms: u64,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self {
            toggle_presses: 0,
            cycle_presses: 0,
            select_x: false,
            select_y: false,
            select_z: false,
            set_reference: false,
            hold_seen: None,
            place_seen: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Record a key press. Edge actions count; level actions refresh their
    /// held timestamp.
    pub fn record_press(&mut self, action: InputAction) {
        match action {
            InputAction::Toggle => self.toggle_presses = self.toggle_presses.saturating_add(1),
            InputAction::CycleAxis => self.cycle_presses = self.cycle_presses.saturating_add(1),
            InputAction::SelectX => self.select_x = true,
            InputAction::SelectY => self.select_y = true,
            InputAction::SelectZ => self.select_z = true,
            InputAction::SetReference => self.set_reference = true,
            InputAction::HoldLock => self.hold_seen = Some(Instant::now()),
            InputAction::Place => self.place_seen = Some(Instant::now()),
            _ => {}
        }
    }

    /// Record a terminal auto-repeat. Only level actions care: a repeat
    /// proves the key is still physically down.
    pub fn record_repeat(&mut self, action: InputAction) {
        match action {
            InputAction::HoldLock => self.hold_seen = Some(Instant::now()),
            InputAction::Place => self.place_seen = Some(Instant::now()),
            _ => {}
        }
    }

    /// Record an explicit key release, for terminals that report them.
    pub fn record_release(&mut self, action: InputAction) {
        match action {
            InputAction::HoldLock => self.hold_seen = None,
            InputAction::Place => self.place_seen = None,
            _ => {}
        }
    }

    fn level_is_down(&self, seen: Option<Instant>) -> bool {
        match seen {
            Some(at) => at.elapsed().as_millis() as u64 <= self.key_release_timeout_ms,
            None => false,
        }
    }

    /// Whether the place key currently counts as held.
    pub fn place_down(&self) -> bool {
        self.level_is_down(self.place_seen)
    }

    /// Drain the accumulated input into one frame, resetting edge state.
    /// Level keys persist across frames until released or timed out.
    pub fn take_frame(&mut self) -> InputFrame {
        let frame = InputFrame {
            toggle_presses: self.toggle_presses,
            hold_down: self.level_is_down(self.hold_seen),
            cycle_presses: self.cycle_presses,
            select_x: self.select_x,
            select_y: self.select_y,
            select_z: self.select_z,
            set_reference_pressed: self.set_reference,
            place_down: self.level_is_down(self.place_seen),
        };

        self.toggle_presses = 0;
        self.cycle_presses = 0;
        self.select_x = false;
        self.select_y = false;
        self.select_z = false;
        self.set_reference = false;

        frame
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
