//! Placement-attempt validation.
//!
//! Invoked by the host once per placement attempt. Read-mostly: the only
//! state it touches is lazily establishing the sequence anchor when a new
//! run begins, plus the self-heal path for a broken sequence invariant.

use axis_lock_types::{BlockPos, Decision};

use crate::session::LockSession;

/// One placement attempt as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    /// The cell the new block would occupy.
    pub place_pos: BlockPos,
    /// Whether the held item actually places a block.
    pub item_is_block: bool,
    /// Spectators never participate in placement filtering.
    pub actor_is_spectator: bool,
    /// False when this invocation is not on the side that decides
    /// placement; such calls pass straight through.
    pub is_authoritative: bool,
}

impl PlacementRequest {
    /// An ordinary block placement: authoritative, non-spectator, block in
    /// hand. The common case in tests and single-player hosts.
    pub fn block_at(place_pos: BlockPos) -> Self {
        Self {
            place_pos,
            item_is_block: true,
            actor_is_spectator: false,
            is_authoritative: true,
        }
    }
}

/// Decide whether a placement attempt may proceed.
///
/// Accept is the default: the filter only ever rejects a placement that
/// breaks the locked-axis constraint of an active run. Internal
/// inconsistency (sequence flag set without an anchor) is logged, healed,
/// and fails open rather than blocking the user.
pub fn evaluate(session: &mut LockSession, request: &PlacementRequest) -> Decision {
    // Fast exits: attempts that are not this filter's concern.
    if !request.is_authoritative
        || !session.effective_active()
        || request.actor_is_spectator
        || !request.item_is_block
    {
        return Decision::Accept;
    }

    let reference = if let Some(reference) = session.manual_reference() {
        reference
    } else if !session.sequence_active() {
        // First block of a run is always allowed; it defines the line.
        session.begin_sequence(request.place_pos);
        return Decision::Accept;
    } else {
        match session.sequence_anchor() {
            Some(anchor) => anchor,
            None => {
                log::warn!(
                    "placement sequence marked active without an anchor; resetting and allowing placement"
                );
                session.clear_sequence();
                return Decision::Accept;
            }
        }
    };

    let axis = session.selected_axis();
    if request.place_pos.component(axis) == reference.component(axis) {
        Decision::Accept
    } else {
        Decision::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::tick;
    use crate::target::NoTarget;
    use axis_lock_types::{Axis, InputFrame};

    fn active_session() -> LockSession {
        let mut session = LockSession::new();
        tick(
            &mut session,
            &InputFrame {
                toggle_presses: 1,
                ..InputFrame::default()
            },
            &NoTarget,
        );
        session
    }

    #[test]
    fn test_inactive_lock_passes_through_without_anchoring() {
        let mut session = LockSession::new();

        let decision = evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(0, 0, 0)));

        assert_eq!(decision, Decision::Accept);
        assert!(!session.sequence_active());
        assert!(session.sequence_anchor().is_none());
    }

    #[test]
    fn test_non_authoritative_side_passes_through() {
        let mut session = active_session();
        let request = PlacementRequest {
            is_authoritative: false,
            ..PlacementRequest::block_at(BlockPos::new(0, 0, 0))
        };

        assert_eq!(evaluate(&mut session, &request), Decision::Accept);
        assert!(!session.sequence_active());
    }

    #[test]
    fn test_spectator_passes_through() {
        let mut session = active_session();
        let request = PlacementRequest {
            actor_is_spectator: true,
            ..PlacementRequest::block_at(BlockPos::new(0, 0, 0))
        };

        assert_eq!(evaluate(&mut session, &request), Decision::Accept);
        assert!(!session.sequence_active());
    }

    #[test]
    fn test_non_block_item_passes_through() {
        let mut session = active_session();
        let request = PlacementRequest {
            item_is_block: false,
            ..PlacementRequest::block_at(BlockPos::new(0, 0, 0))
        };

        assert_eq!(evaluate(&mut session, &request), Decision::Accept);
        assert!(!session.sequence_active());
    }

    #[test]
    fn test_first_placement_anchors_and_accepts() {
        let mut session = active_session();
        let pos = BlockPos::new(7, -2, 13);

        let decision = evaluate(&mut session, &PlacementRequest::block_at(pos));

        assert_eq!(decision, Decision::Accept);
        assert!(session.sequence_active());
        assert_eq!(session.sequence_anchor(), Some(pos));
    }

    #[test]
    fn test_locked_axis_must_match_others_are_free() {
        let mut session = active_session();
        assert_eq!(session.selected_axis(), Axis::Y);
        evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(5, 10, 5)));

        // Same Y, wildly different X/Z: accepted.
        assert_eq!(
            evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(99, 10, -3))),
            Decision::Accept
        );
        // Y off by one: rejected.
        assert_eq!(
            evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(5, 11, 5))),
            Decision::Reject
        );
    }

    #[test]
    fn test_rejection_leaves_anchor_untouched() {
        let mut session = active_session();
        let anchor = BlockPos::new(0, 4, 0);
        evaluate(&mut session, &PlacementRequest::block_at(anchor));

        evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(0, 9, 0)));

        assert_eq!(session.sequence_anchor(), Some(anchor));
    }

    #[test]
    fn test_manual_reference_wins_over_anchor() {
        let mut session = active_session();
        session.set_manual_reference(BlockPos::new(10, 10, 10));

        // Accepting against the reference never establishes an anchor.
        assert_eq!(
            evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(3, 10, 8))),
            Decision::Accept
        );
        assert!(!session.sequence_active());

        assert_eq!(
            evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(3, 11, 8))),
            Decision::Reject
        );
        assert_eq!(session.manual_reference(), Some(BlockPos::new(10, 10, 10)));
    }

    #[test]
    fn test_broken_sequence_invariant_heals_and_accepts() {
        let mut session = active_session();
        session.force_inconsistent_sequence();

        let decision = evaluate(&mut session, &PlacementRequest::block_at(BlockPos::new(1, 2, 3)));

        assert_eq!(decision, Decision::Accept);
        assert!(!session.sequence_active());
        assert!(session.sequence_anchor().is_none());
    }
}
