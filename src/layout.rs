//! Paging layout math for the centered carousel.
//!
//! ## Usage
//!
//! Build a [`LayoutInput`] snapshot and feed it to [`compute`] whenever
//! the viewport, the selection, or the live drag translation changes.
//! The math is pure: identical inputs always produce identical frames,
//! so results may be memoized by the full input tuple.

use thiserror::Error;

/// Snapshot of everything one layout pass needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInput {
    /// Width of the rendering viewport.
    pub viewport_width: f32,
    /// Number of items in the strip.
    pub item_count: usize,
    /// Index of the selected item within the strip.
    pub selected_index: usize,
    /// Gap between adjacent items.
    pub spacing: f32,
    /// Fraction of the viewport width allocated to one item.
    pub width_ratio: f32,
    /// Horizontal translation of the drag gesture currently in progress,
    /// zero at rest.
    pub drag_translation: f32,
    /// Whether the first and last item share one identity (always the
    /// case for a single-item strip). Such strips never move.
    pub degenerate: bool,
}

/// Result of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayoutFrame {
    /// Rendered width of every item.
    pub item_width: f32,
    /// Horizontal translation of the item strip. At rest this centers
    /// the selected item in the viewport.
    pub strip_offset: f32,
}

/// Rejections produced by input validation.
///
/// Every variant is handled locally by the caller; none surfaces to the
/// user of the widget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A host fed a NaN or infinite value into the layout pass.
    #[error("non-finite layout input: {0}")]
    NonFiniteInput(&'static str),
}

/// Computes the rendered width of a single item.
///
/// Non-positive viewport widths produce a zero item width instead of a
/// negative one; nothing here divides by the viewport width, so a
/// transient zero-size report is harmless.
pub fn item_width(viewport_width: f32, width_ratio: f32) -> f32 {
    (viewport_width * width_ratio).max(0.0)
}

/// Distance between the anchors of two successive items.
pub fn step_distance(item_width: f32, spacing: f32) -> f32 {
    item_width + spacing
}

/// Strip offset that would center the item at `index`, ignoring any
/// in-progress drag. Meaningful for non-empty strips only.
pub fn anchor_for_index(input: &LayoutInput, index: usize) -> f32 {
    let item_width = item_width(input.viewport_width, input.width_ratio);
    let count = input.item_count as f32;
    let total_spacing = (count - 1.0) * input.spacing;
    let total_content_width = item_width * count + total_spacing;
    let centering_shift = (total_content_width - input.viewport_width) / 2.0;
    // Width of the neighboring item sliver peeking at each edge.
    let edge_inset = (input.viewport_width - item_width - input.spacing * 2.0) / 2.0;
    let leading_pad = edge_inset + input.spacing;
    centering_shift + leading_pad - step_distance(item_width, input.spacing) * index as f32
}

/// Runs one layout pass.
///
/// Empty strips yield a zeroed frame. Degenerate strips keep their
/// offset pinned at zero for any drag translation. Everything else gets
/// the selected item's anchor, shifted by the live translation while the
/// neighboring anchor is distinguishable from the current one.
pub fn compute(input: &LayoutInput) -> Result<LayoutFrame, LayoutError> {
    validate(input)?;

    if input.item_count == 0 {
        return Ok(LayoutFrame::default());
    }

    let item_width = item_width(input.viewport_width, input.width_ratio);
    if input.item_count == 1 || input.degenerate {
        return Ok(LayoutFrame {
            item_width,
            strip_offset: 0.0,
        });
    }

    let current_anchor = anchor_for_index(input, input.selected_index);
    let next_anchor = anchor_for_index(input, input.selected_index + 1);

    // Adjacent anchors coincide only when the step collapses to zero;
    // the drag must not move the strip then.
    let strip_offset = if current_anchor != next_anchor {
        current_anchor + input.drag_translation
    } else {
        current_anchor
    };

    Ok(LayoutFrame {
        item_width,
        strip_offset,
    })
}

fn validate(input: &LayoutInput) -> Result<(), LayoutError> {
    if !input.viewport_width.is_finite() {
        return Err(LayoutError::NonFiniteInput("viewport_width"));
    }
    if !input.spacing.is_finite() {
        return Err(LayoutError::NonFiniteInput("spacing"));
    }
    if !input.width_ratio.is_finite() {
        return Err(LayoutError::NonFiniteInput("width_ratio"));
    }
    if !input.drag_translation.is_finite() {
        return Err(LayoutError::NonFiniteInput("drag_translation"));
    }
    Ok(())
}
