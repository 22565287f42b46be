//! Drag gesture state machine.
//!
//! Raw drag samples come in, a live translation and an occasional
//! selection commit come out. Sign convention follows left-to-right
//! reading order: a negative translation drags toward the next item, a
//! positive one toward the previous item.

use tracing::debug;

/// Phase of the drag machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is being tracked.
    Dragging,
}

/// One raw gesture sample delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// The pointer moved; carries the horizontal translation accumulated
    /// since the drag started.
    Moved(f32),
    /// The drag ended; carries the final horizontal translation.
    Ended(f32),
    /// The drag was interrupted by the system. Equivalent to ending with
    /// a zero translation.
    Cancelled,
}

/// Which neighbor a finished drag committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitDirection {
    /// Advance to the following item.
    Next,
    /// Recede to the preceding item.
    Previous,
}

/// Layout facts the commit rule needs at gesture end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommitContext {
    /// Item width from the last completed layout pass.
    pub item_width: f32,
    /// Whether the selected item is the first in the strip.
    pub is_first: bool,
    /// Whether the selected item is the last in the strip.
    pub is_last: bool,
}

/// What the machine decided after consuming one sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureOutcome {
    /// Live translation to feed back into the next layout pass. Always
    /// zero once the machine is back in [`DragPhase::Idle`].
    pub live_translation: f32,
    /// Selection step to commit, if the drag cleared the threshold.
    pub commit: Option<CommitDirection>,
}

/// Finite state machine turning raw drag samples into selection commits.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    phase: DragPhase,
}

impl GestureController {
    /// Creates a controller at rest.
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Whether a drag is currently being tracked.
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Consumes one gesture sample.
    ///
    /// `Moved` enters (or stays in) `Dragging` and republishes the live
    /// translation. `Ended` evaluates the commit rule against a quarter
    /// of the last known item width and always returns to `Idle` with a
    /// zero translation. `Cancelled` also returns to `Idle` and never
    /// commits.
    pub fn handle_event(&mut self, event: GestureEvent, ctx: CommitContext) -> GestureOutcome {
        match event {
            GestureEvent::Moved(translation) => {
                if self.phase == DragPhase::Idle {
                    debug!(translation, "drag started");
                    self.phase = DragPhase::Dragging;
                }
                GestureOutcome {
                    live_translation: translation,
                    commit: None,
                }
            }
            GestureEvent::Ended(translation) => {
                self.phase = DragPhase::Idle;
                let commit = evaluate_commit(translation, ctx);
                if let Some(direction) = commit {
                    debug!(?direction, translation, "drag committed");
                }
                GestureOutcome {
                    live_translation: 0.0,
                    commit,
                }
            }
            GestureEvent::Cancelled => {
                if self.phase == DragPhase::Dragging {
                    debug!("drag cancelled");
                }
                self.phase = DragPhase::Idle;
                GestureOutcome::default()
            }
        }
    }
}

/// Commit rule: a drag past a quarter of the item width selects the
/// neighbor in that direction, unless the strip edge blocks it.
fn evaluate_commit(end_translation: f32, ctx: CommitContext) -> Option<CommitDirection> {
    let threshold = ctx.item_width / 4.0;
    if end_translation < -threshold && !ctx.is_last {
        return Some(CommitDirection::Next);
    }
    if end_translation > threshold && !ctx.is_first {
        return Some(CommitDirection::Previous);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn middle() -> CommitContext {
        CommitContext {
            item_width: 240.0,
            is_first: false,
            is_last: false,
        }
    }

    #[test]
    fn moved_enters_dragging_and_publishes_translation() {
        let mut controller = GestureController::new();
        assert_eq!(controller.phase(), DragPhase::Idle);

        let outcome = controller.handle_event(GestureEvent::Moved(-25.0), middle());
        assert_eq!(controller.phase(), DragPhase::Dragging);
        assert_eq!(outcome.live_translation, -25.0);
        assert_eq!(outcome.commit, None);

        let outcome = controller.handle_event(GestureEvent::Moved(-40.0), middle());
        assert_eq!(controller.phase(), DragPhase::Dragging);
        assert_eq!(outcome.live_translation, -40.0);
    }

    #[test]
    fn flick_past_the_threshold_commits_forward() {
        let mut controller = GestureController::new();
        controller.handle_event(GestureEvent::Moved(-70.0), middle());
        let outcome = controller.handle_event(GestureEvent::Ended(-70.0), middle());
        assert_eq!(outcome.commit, Some(CommitDirection::Next));
        assert_eq!(outcome.live_translation, 0.0);
        assert_eq!(controller.phase(), DragPhase::Idle);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut controller = GestureController::new();
        controller.handle_event(GestureEvent::Moved(-40.0), middle());
        let outcome = controller.handle_event(GestureEvent::Ended(-40.0), middle());
        assert_eq!(outcome.commit, None);
        assert_eq!(outcome.live_translation, 0.0);
    }

    #[test]
    fn last_item_blocks_a_forward_commit() {
        let ctx = CommitContext {
            is_last: true,
            ..middle()
        };
        let mut controller = GestureController::new();
        controller.handle_event(GestureEvent::Moved(-100.0), ctx);
        let outcome = controller.handle_event(GestureEvent::Ended(-100.0), ctx);
        assert_eq!(outcome.commit, None);
    }

    #[test]
    fn first_item_blocks_a_backward_commit() {
        let ctx = CommitContext {
            is_first: true,
            ..middle()
        };
        let mut controller = GestureController::new();
        let outcome = controller.handle_event(GestureEvent::Ended(100.0), ctx);
        assert_eq!(outcome.commit, None);
    }

    #[test]
    fn backward_flick_commits_previous() {
        let mut controller = GestureController::new();
        let outcome = controller.handle_event(GestureEvent::Ended(61.0), middle());
        assert_eq!(outcome.commit, Some(CommitDirection::Previous));
    }

    #[test]
    fn exact_threshold_does_not_commit() {
        let mut controller = GestureController::new();
        let outcome = controller.handle_event(GestureEvent::Ended(-60.0), middle());
        assert_eq!(outcome.commit, None);
        let outcome = controller.handle_event(GestureEvent::Ended(60.0), middle());
        assert_eq!(outcome.commit, None);
    }

    #[test]
    fn cancellation_resets_without_commit() {
        let mut controller = GestureController::new();
        controller.handle_event(GestureEvent::Moved(-300.0), middle());
        let outcome = controller.handle_event(GestureEvent::Cancelled, middle());
        assert_eq!(outcome, GestureOutcome::default());
        assert_eq!(controller.phase(), DragPhase::Idle);
    }
}
