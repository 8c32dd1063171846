//! Key mapping from terminal events to logical actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical actions the sandbox understands.
///
/// Lock actions feed the per-tick [`FrameBuilder`](crate::FrameBuilder);
/// aim actions move the cursor immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Flip the sticky lock toggle (edge).
    Toggle,
    /// Advance the selected axis (edge).
    CycleAxis,
    /// Hold-to-lock key (level).
    HoldLock,
    SelectX,
    SelectY,
    SelectZ,
    /// Capture or clear the manual reference point (edge).
    SetReference,
    /// Place-action key (level; each press also attempts a placement).
    Place,

    // Aim cursor movement (sandbox only).
    AimNorth,
    AimSouth,
    AimWest,
    AimEast,
    AimUp,
    AimDown,
    CycleFace,
}

impl InputAction {
    /// Whether this action is a held key rather than a discrete press.
    pub fn is_level(self) -> bool {
        matches!(self, InputAction::HoldLock | InputAction::Place)
    }
}

/// Map keyboard input to a logical action.
///
/// The toggle and cycle defaults ('r', 'y') match the original key
/// bindings of the feature; the rest use free keys.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Lock controls
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Toggle),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(InputAction::CycleAxis),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(InputAction::HoldLock),
        KeyCode::Char('1') => Some(InputAction::SelectX),
        KeyCode::Char('2') => Some(InputAction::SelectY),
        KeyCode::Char('3') => Some(InputAction::SelectZ),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(InputAction::SetReference),
        KeyCode::Char(' ') => Some(InputAction::Place),

        // Aim movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputAction::AimNorth),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputAction::AimSouth),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputAction::AimWest),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputAction::AimEast),
        KeyCode::PageUp | KeyCode::Char('k') | KeyCode::Char('K') => Some(InputAction::AimUp),
        KeyCode::PageDown | KeyCode::Char('j') | KeyCode::Char('J') => Some(InputAction::AimDown),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(InputAction::CycleFace),

        _ => None,
    }
}

/// Check if key should quit the sandbox.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
