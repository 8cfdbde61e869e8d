//! # scout-search
//!
//! Filter engine for the Scout catalog browser.
//!
//! Provides:
//! - [`FilterState`] and the pure [`filter`] function over catalog entries
//! - [`Debouncer`], the cancellable deferred-task primitive that defers
//!   text-driven recomputation until typing pauses
//!
//! Filtering is stateless: the filtered set is always a pure function of
//! (catalog, filter state), preserving catalog order.

mod debounce;
mod filter;

pub use debounce::Debouncer;
pub use filter::{FilterState, filter};
