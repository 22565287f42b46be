//! Interchangeable paging strategies.
//!
//! ## Usage
//!
//! Pick a strategy once at construction. [`ManualPaging`] is the default:
//! this crate owns the strip offset and the drag machine. [`NativeSnap`]
//! fits hosts whose platform scroller snaps to items on its own; the
//! strip offset belongs to the platform there, and the pager only keeps
//! the selection in sync through
//! [`report_centered_item`](crate::pager::Pager::report_centered_item).
//! Both paths end a comparable flick on the same selected item.

use crate::{
    gesture::{CommitContext, GestureController, GestureEvent, GestureOutcome},
    layout::{self, LayoutError, LayoutFrame, LayoutInput},
};

/// One way of producing layout frames and reacting to gesture samples.
pub trait PagingStrategy: Send {
    /// Runs one layout pass for the given snapshot.
    fn compute_layout(&self, input: &LayoutInput) -> Result<LayoutFrame, LayoutError>;

    /// Consumes one raw gesture sample.
    fn handle_gesture_event(&mut self, event: GestureEvent, ctx: CommitContext) -> GestureOutcome;

    /// Whether a drag is currently being tracked.
    fn is_dragging(&self) -> bool {
        false
    }
}

/// Strategy that owns offsets and the drag machine.
#[derive(Clone, Debug, Default)]
pub struct ManualPaging {
    controller: GestureController,
}

impl ManualPaging {
    /// Creates the strategy at rest.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PagingStrategy for ManualPaging {
    fn compute_layout(&self, input: &LayoutInput) -> Result<LayoutFrame, LayoutError> {
        layout::compute(input)
    }

    fn handle_gesture_event(&mut self, event: GestureEvent, ctx: CommitContext) -> GestureOutcome {
        self.controller.handle_event(event, ctx)
    }

    fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}

/// Strategy for hosts with a native snapping scroller.
///
/// The platform owns the strip offset, so layout passes report the item
/// width with a zero offset and gesture samples are ignored entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeSnap;

impl NativeSnap {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

impl PagingStrategy for NativeSnap {
    fn compute_layout(&self, input: &LayoutInput) -> Result<LayoutFrame, LayoutError> {
        let frame = layout::compute(input)?;
        Ok(LayoutFrame {
            item_width: frame.item_width,
            strip_offset: 0.0,
        })
    }

    fn handle_gesture_event(
        &mut self,
        _event: GestureEvent,
        _ctx: CommitContext,
    ) -> GestureOutcome {
        GestureOutcome::default()
    }
}
