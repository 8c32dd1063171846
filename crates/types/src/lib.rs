//! Core types shared across the workspace.
//!
//! This crate contains pure data types with no external dependencies:
//! axes, block positions, faces, per-tick input frames, placement
//! decisions, and user-facing notifications.

/// Fixed timestep duration (in milliseconds).
pub const TICK_MS: u32 = 16;

/// An axis of the block grid.
///
/// Locking an axis constrains successive placements to cells whose
/// coordinate on that axis matches the reference cell. The other two
/// coordinates stay free, which is what turns a lock into a line or plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Cyclic successor used by the cycle-axis action: X → Y → Z → X.
    ///
    /// The wraparound is an explicit mapping, not ordinal arithmetic.
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Uppercase single-letter name ("X", "Y", or "Z").
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discrete cell position in the block grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate of this position on the given axis.
    pub fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// The neighboring cell one step out of the given face.
    pub fn offset(self, face: Face) -> Self {
        let (dx, dy, dz) = face.normal();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six axis-aligned faces of a cell.
///
/// Placement lands in the cell adjacent to the targeted face, so the face
/// determines where a new block goes relative to the block being aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Face {
    /// Unit offset out of this face: (dx, dy, dz).
    pub fn normal(self) -> (i32, i32, i32) {
        match self {
            Face::Down => (0, -1, 0),
            Face::Up => (0, 1, 0),
            Face::North => (0, 0, -1),
            Face::South => (0, 0, 1),
            Face::West => (-1, 0, 0),
            Face::East => (1, 0, 0),
        }
    }

    /// The axis this face is perpendicular to.
    pub fn axis(self) -> Axis {
        match self {
            Face::West | Face::East => Axis::X,
            Face::Down | Face::Up => Axis::Y,
            Face::North | Face::South => Axis::Z,
        }
    }

    /// Cyclic order used by the sandbox's cycle-face action.
    pub fn next(self) -> Self {
        match self {
            Face::Up => Face::North,
            Face::North => Face::East,
            Face::East => Face::South,
            Face::South => Face::West,
            Face::West => Face::Down,
            Face::Down => Face::Up,
        }
    }

    /// Lowercase face name.
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Down => "down",
            Face::Up => "up",
            Face::North => "north",
            Face::South => "south",
            Face::West => "west",
            Face::East => "east",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tick's worth of debounced logical input.
///
/// Edge-triggered actions arrive as counts because a single tick can
/// coalesce more than one press; level-triggered keys arrive as the level
/// currently held. The two shapes are deliberately distinct: the reducer's
/// precedence rules (hold suppressing toggle) depend on never conflating
/// "was pressed" with "is pressed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Toggle-lock presses this tick (edge, may coalesce).
    pub toggle_presses: u8,
    /// Whether the hold-to-lock key is currently down (level).
    pub hold_down: bool,
    /// Cycle-axis presses this tick (edge, may coalesce).
    pub cycle_presses: u8,
    /// Direct selection of the X axis this tick (edge).
    pub select_x: bool,
    /// Direct selection of the Y axis this tick (edge).
    pub select_y: bool,
    /// Direct selection of the Z axis this tick (edge).
    pub select_z: bool,
    /// Reference-point toggle pressed this tick (edge).
    pub set_reference_pressed: bool,
    /// Whether the place-action key is currently down (level).
    pub place_down: bool,
}

/// Outcome of a placement-attempt evaluation.
///
/// `Accept` passes the attempt through to normal placement behavior;
/// `Reject` blocks it. Rejection is an ordinary decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn is_accept(self) -> bool {
        matches!(self, Decision::Accept)
    }
}

/// Presentation tone of a notification.
///
/// Sinks map tones to colors (green / red / white in the terminal sandbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// A user-facing status event emitted by the lock state machine.
///
/// The core decides when these fire and what they say; sinks only render
/// them. `Display` produces the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    HoldEnabled(Axis),
    HoldDisabled,
    ToggleEnabled(Axis),
    ToggleDisabled,
    AxisCycled(Axis),
    AxisSelected(Axis),
    ReferenceSet(BlockPos),
    ReferenceCleared,
    ReferenceUnavailable,
}

impl Notification {
    pub fn tone(self) -> Tone {
        match self {
            Notification::HoldEnabled(_)
            | Notification::ToggleEnabled(_)
            | Notification::ReferenceSet(_) => Tone::Positive,
            Notification::HoldDisabled
            | Notification::ToggleDisabled
            | Notification::ReferenceUnavailable => Tone::Negative,
            Notification::AxisCycled(_)
            | Notification::AxisSelected(_)
            | Notification::ReferenceCleared => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::HoldEnabled(axis) => write!(f, "hold lock enabled (axis={axis})"),
            Notification::HoldDisabled => f.write_str("hold lock disabled"),
            Notification::ToggleEnabled(axis) => write!(f, "axis lock enabled (axis={axis})"),
            Notification::ToggleDisabled => f.write_str("axis lock disabled"),
            Notification::AxisCycled(axis) => write!(f, "axis changed to {axis}"),
            Notification::AxisSelected(axis) => write!(f, "axis selected {axis}"),
            Notification::ReferenceSet(pos) => write!(f, "reference point set to {pos}"),
            Notification::ReferenceCleared => f.write_str("reference point cleared"),
            Notification::ReferenceUnavailable => {
                f.write_str("no block targeted for reference point")
            }
        }
    }
}
