//! Axis-lock core - pure, deterministic, and testable
//!
//! This crate contains the whole decision logic of the axis-lock feature.
//! It has **zero dependencies** on input devices, rendering, or world
//! storage, making it:
//!
//! - **Deterministic**: the same frames and placement attempts always
//!   produce the same decisions and notifications
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: embeds in any host with a tick loop and a placement hook
//!
//! # Module Structure
//!
//! - [`session`]: the [`LockSession`] state object and its invariants
//! - [`reducer`]: the per-tick input pipeline ([`tick`])
//! - [`validator`]: the placement decision ([`evaluate`])
//! - [`target`]: the seam to the host's world/aim model
//!
//! # Behavior
//!
//! The lock is active while its sticky toggle is on or the hold key is
//! down. The first placement of a run anchors a line/plane; subsequent
//! placements must match the anchor on the selected axis and are free on
//! the other two. A manually captured reference point overrides the
//! implicit anchor until explicitly cleared. Deactivating the lock,
//! changing axis mid-run, or releasing the place key ends the run.
//!
//! # Example
//!
//! ```
//! use axis_lock_core::{evaluate, tick, LockSession, NoTarget, PlacementRequest};
//! use axis_lock_types::{BlockPos, Decision, InputFrame};
//!
//! let mut session = LockSession::new();
//!
//! // Toggle the lock on (default axis: Y).
//! let frame = InputFrame { toggle_presses: 1, ..InputFrame::default() };
//! let notes = tick(&mut session, &frame, &NoTarget);
//! assert_eq!(notes.len(), 1);
//! assert!(session.effective_active());
//!
//! // First placement anchors the run...
//! let first = evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(0, 64, 0)));
//! assert_eq!(first, Decision::Accept);
//!
//! // ...after which only the Y coordinate is constrained.
//! let level = evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(5, 64, -2)));
//! let above = evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(0, 65, 0)));
//! assert_eq!(level, Decision::Accept);
//! assert_eq!(above, Decision::Reject);
//! ```
//!
//! # Error handling
//!
//! There is exactly one internal error class: the sequence flag set while
//! the anchor is absent. The validator logs it through [`log`], clears the
//! flag, and accepts the placement - the filter fails open and never
//! blocks the user because of its own bug. Everything else (a rejected
//! placement, a reference-point press with nothing targeted) is an
//! ordinary outcome, not an error.

pub mod reducer;
pub mod session;
pub mod target;
pub mod validator;

pub use reducer::{tick, Notifications, NOTIFY_CAP};
pub use session::LockSession;
pub use target::{NoTarget, TargetSource, TargetedBlock};
pub use validator::{evaluate, PlacementRequest};
