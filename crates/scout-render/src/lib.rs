//! # scout-render
//!
//! Rendering for the Scout catalog browser.
//!
//! Converts a filtered set of entries into escaped HTML card fragments and
//! tracks the two-state grid view (results shown vs. empty state). All
//! user-supplied text, including URLs placed in attributes, is HTML-escaped
//! before insertion.

mod html;
mod view;

pub use html::{error_panel, escape_html, server_card};
pub use view::{GridState, GridView};
