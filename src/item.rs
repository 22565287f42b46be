//! Item contract for paged content.

use std::fmt::Debug;

/// An application-supplied value shown as one carousel item.
///
/// The pager never inspects content, only identity and the position an
/// item occupies in the sequence it was constructed with. Two items are
/// the same exactly when their ids are equal.
pub trait PagerItem {
    /// Stable identifier used for selection tracking.
    type Id: Clone + PartialEq + Debug;

    /// Returns the item's identifier.
    fn id(&self) -> Self::Id;
}
