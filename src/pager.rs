//! Carousel widget facade.
//!
//! ## Usage
//!
//! Mount a [`Pager`] with the item sequence, a shared
//! [`SelectionBinding`], and [`PagerArgs`]. Feed it viewport size reports
//! and gesture samples; read back a [`LayoutFrame`] per pass and iterate
//! the visible items with the host's content renderer.

use std::sync::Arc;

use derive_setters::Setters;
use tracing::warn;

use crate::{
    binding::SelectionBinding,
    gesture::{CommitContext, CommitDirection, GestureEvent},
    item::PagerItem,
    layout::{LayoutFrame, LayoutInput},
    strategy::{ManualPaging, NativeSnap, PagingStrategy},
};

const DEFAULT_SPACING: f32 = 10.0;
const DEFAULT_WIDTH_RATIO: f32 = 0.8;

/// Fire-and-forget notification for gesture-driven selection commits.
pub type FeedbackHandler = Arc<dyn Fn() + Send + Sync>;

/// Configuration for a pager instance, immutable after construction.
#[derive(Clone, Setters)]
pub struct PagerArgs {
    /// Gap between adjacent items.
    pub spacing: f32,
    /// Item width as a fraction of the viewport width, in `(0, 1]`.
    pub width_ratio: f32,
    /// Number of extra items kept renderable on either side of the
    /// selected item and its peeking neighbors.
    pub beyond_viewport: usize,
    /// Invoked exactly once per gesture-driven selection commit, never
    /// for programmatic selection changes.
    #[setters(strip_option)]
    pub feedback: Option<FeedbackHandler>,
}

impl Default for PagerArgs {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            width_ratio: DEFAULT_WIDTH_RATIO,
            beyond_viewport: 0,
            feedback: None,
        }
    }
}

/// Last-observed layout bounds of the viewport.
///
/// Populated asynchronously by the host's size observation after each
/// layout pass; both fields may transiently be zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
}

/// A mounted carousel instance.
///
/// Owns the item sequence and the transient widget state; the selection
/// itself lives in the externally shared [`SelectionBinding`], which is
/// re-read on every pass so programmatic writes are picked up
/// transparently.
pub struct Pager<I: PagerItem> {
    items: Vec<I>,
    selection: SelectionBinding<I::Id>,
    args: PagerArgs,
    viewport: Viewport,
    live_translation: f32,
    last_frame: LayoutFrame,
    strategy: Box<dyn PagingStrategy>,
}

impl<I: PagerItem> Pager<I> {
    /// Creates a pager on the manual paging path.
    pub fn new(items: Vec<I>, selection: SelectionBinding<I::Id>, args: PagerArgs) -> Self {
        Self::with_strategy(items, selection, args, Box::new(ManualPaging::new()))
    }

    /// Creates a pager on the native snapping path.
    ///
    /// The platform scroller owns the offset; keep the selection synced
    /// with [`Pager::report_centered_item`].
    pub fn native(items: Vec<I>, selection: SelectionBinding<I::Id>, args: PagerArgs) -> Self {
        Self::with_strategy(items, selection, args, Box::new(NativeSnap::new()))
    }

    /// Creates a pager with an explicit strategy.
    pub fn with_strategy(
        items: Vec<I>,
        selection: SelectionBinding<I::Id>,
        args: PagerArgs,
        strategy: Box<dyn PagingStrategy>,
    ) -> Self {
        let args = sanitize_args(args);
        if !items.is_empty() {
            let id = selection.get();
            if !items.iter().any(|item| item.id() == id) {
                warn!(?id, "initial selection not present in items; the first item acts as selected");
            }
        }
        Self {
            items,
            selection,
            args,
            viewport: Viewport::default(),
            live_translation: 0.0,
            last_frame: LayoutFrame::default(),
            strategy,
        }
    }

    /// Records a viewport size report from the host.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }

    /// The item sequence.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// The sanitized configuration in effect.
    pub fn args(&self) -> &PagerArgs {
        &self.args
    }

    /// The last viewport size report.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// A handle to the shared selection cell.
    pub fn selection(&self) -> &SelectionBinding<I::Id> {
        &self.selection
    }

    /// The live drag translation, zero outside an active gesture.
    pub fn live_translation(&self) -> f32 {
        self.live_translation
    }

    /// The frame produced by the most recent layout pass.
    pub fn last_frame(&self) -> LayoutFrame {
        self.last_frame
    }

    /// Whether a drag is currently being tracked.
    pub fn is_dragging(&self) -> bool {
        self.strategy.is_dragging()
    }

    /// Index of the selected item, or `None` for an empty sequence.
    ///
    /// A selection id that no longer matches any item degrades to the
    /// first item instead of failing.
    pub fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let id = self.selection.get();
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => Some(index),
            None => {
                warn!(?id, "selected id not found; falling back to the first item");
                Some(0)
            }
        }
    }

    /// The selected item, or `None` for an empty sequence.
    pub fn selected_item(&self) -> Option<&I> {
        self.selected_index().and_then(|index| self.items.get(index))
    }

    /// Runs one layout pass and caches the frame.
    ///
    /// Call after every viewport report, selection change, or gesture
    /// sample. Empty sequences and rejected inputs both produce a zeroed
    /// frame; nothing here is user-visible as an error.
    pub fn layout(&mut self) -> LayoutFrame {
        let Some(index) = self.selected_index() else {
            self.last_frame = LayoutFrame::default();
            return self.last_frame;
        };
        let input = self.layout_input(index);
        match self.strategy.compute_layout(&input) {
            Ok(frame) => self.last_frame = frame,
            Err(err) => {
                warn!(%err, "layout pass rejected; rendering an empty frame");
                self.last_frame = LayoutFrame::default();
            }
        }
        self.last_frame
    }

    /// Feeds one raw gesture sample to the active strategy and applies
    /// whatever it decided: the live translation for the next pass, and
    /// at most one selection commit per completed gesture.
    pub fn handle_gesture_event(&mut self, event: GestureEvent) {
        let index = self.selected_index();
        let ctx = CommitContext {
            item_width: self.last_frame.item_width,
            is_first: index.is_none_or(|i| i == 0),
            is_last: index.is_none_or(|i| i + 1 >= self.items.len()),
        };
        let outcome = self.strategy.handle_gesture_event(event, ctx);
        self.live_translation = outcome.live_translation;
        if let Some(direction) = outcome.commit {
            self.commit(direction, index);
        }
    }

    /// Programmatically selects the item with `id`.
    ///
    /// Ids not present in the sequence are ignored. Never fires the
    /// feedback handler.
    pub fn select(&mut self, id: I::Id) {
        if self.items.iter().any(|item| item.id() == id) {
            self.selection.set(id);
        } else {
            warn!(?id, "selection request does not match any item");
        }
    }

    /// Programmatically advances the selection by one item, saturating at
    /// the end of the sequence.
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected_index()
            && let Some(item) = self.items.get(index + 1)
        {
            self.selection.set(item.id());
        }
    }

    /// Programmatically recedes the selection by one item, saturating at
    /// the start of the sequence.
    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected_index()
            && index > 0
            && let Some(item) = self.items.get(index - 1)
        {
            self.selection.set(item.id());
        }
    }

    /// Syncs the selection with the item the platform scroller reports as
    /// centered. The native-path counterpart of a gesture commit; fires
    /// no feedback.
    pub fn report_centered_item(&mut self, id: I::Id) {
        if self.items.iter().any(|item| item.id() == id) {
            self.selection.set(id);
        } else {
            warn!(?id, "centered item report does not match any item");
        }
    }

    /// Indices worth rendering this pass: the selected item, its peeking
    /// neighbors, and `beyond_viewport` extra items on either side.
    pub fn visible_indices(&self) -> Vec<usize> {
        visible_window(
            self.selected_index().unwrap_or(0),
            self.items.len(),
            self.args.beyond_viewport,
        )
    }

    /// Invokes the host's content renderer once per visible item.
    pub fn render_visible(&self, mut render: impl FnMut(&I)) {
        for index in self.visible_indices() {
            if let Some(item) = self.items.get(index) {
                render(item);
            }
        }
    }

    fn layout_input(&self, index: usize) -> LayoutInput {
        let degenerate = match (self.items.first(), self.items.last()) {
            (Some(first), Some(last)) => first.id() == last.id(),
            _ => true,
        };
        LayoutInput {
            viewport_width: self.viewport.width,
            item_count: self.items.len(),
            selected_index: index,
            spacing: self.args.spacing,
            width_ratio: self.args.width_ratio,
            drag_translation: self.live_translation,
            degenerate,
        }
    }

    fn commit(&mut self, direction: CommitDirection, index: Option<usize>) {
        let Some(index) = index else { return };
        let target = match direction {
            CommitDirection::Next => index.checked_add(1),
            CommitDirection::Previous => index.checked_sub(1),
        };
        let Some(item) = target.and_then(|target| self.items.get(target)) else {
            warn!(?direction, index, "commit target out of range");
            return;
        };
        self.selection.set(item.id());
        if let Some(feedback) = &self.args.feedback {
            feedback();
        }
    }
}

fn sanitize_args(mut args: PagerArgs) -> PagerArgs {
    if !(args.width_ratio > 0.0 && args.width_ratio <= 1.0) {
        warn!(
            width_ratio = args.width_ratio,
            "width ratio outside (0, 1]; using the default"
        );
        args.width_ratio = DEFAULT_WIDTH_RATIO;
    }
    if !(args.spacing >= 0.0) || !args.spacing.is_finite() {
        warn!(spacing = args.spacing, "invalid spacing; using the default");
        args.spacing = DEFAULT_SPACING;
    }
    args
}

fn visible_window(selected: usize, count: usize, beyond: usize) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let reach = beyond.saturating_add(1);
    let start = selected.saturating_sub(reach);
    let end = selected
        .saturating_add(reach)
        .saturating_add(1)
        .min(count);
    (start..end).collect()
}
