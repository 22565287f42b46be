//! Core logic for a centered horizontal carousel.
//!
//! One item (plus a sliver of each neighbor) is visible at a time; a drag
//! past a quarter of the item width advances or recedes the selection.
//! This crate owns the two non-trivial pieces of that widget, the paging
//! layout math and the drag-to-select state machine, and talks to the
//! host UI framework through small contracts: a viewport size feed, a
//! shared selection cell, an item renderer closure, and a fire-and-forget
//! feedback hook.
//!
//! # Usage
//!
//! ```
//! use horizontal_pager::binding::SelectionBinding;
//! use horizontal_pager::gesture::GestureEvent;
//! use horizontal_pager::item::PagerItem;
//! use horizontal_pager::pager::{Pager, PagerArgs};
//!
//! #[derive(Clone)]
//! struct Card(&'static str);
//!
//! impl PagerItem for Card {
//!     type Id = &'static str;
//!
//!     fn id(&self) -> Self::Id {
//!         self.0
//!     }
//! }
//!
//! let cards = vec![Card("a"), Card("b"), Card("c"), Card("d")];
//! let selection = SelectionBinding::new("a");
//! let mut pager = Pager::new(cards, selection.clone(), PagerArgs::default());
//!
//! pager.set_viewport(300.0, 200.0);
//! let frame = pager.layout();
//! assert_eq!(frame.item_width, 240.0);
//!
//! // A flick past a quarter of the item width advances the selection.
//! pager.handle_gesture_event(GestureEvent::Moved(-70.0));
//! pager.handle_gesture_event(GestureEvent::Ended(-70.0));
//! assert_eq!(selection.get(), "b");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod binding;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod pager;
pub mod strategy;
