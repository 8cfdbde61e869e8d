//! # scout-core
//!
//! Core types for the Scout MCP server catalog browser.
//!
//! This crate provides the foundational types shared across all Scout crates:
//! - The catalog document ([`Catalog`]) and its records ([`Entry`],
//!   [`CategoryInfo`], [`EntryLinks`])
//! - The [`ServerType`] enum with its wire representation
//!
//! All catalog data is immutable after load: nothing in Scout mutates a
//! [`Catalog`] once it has been deserialized.

pub mod entry;
pub mod enums;

pub use entry::{Catalog, CategoryInfo, Entry, EntryLinks};
pub use enums::ServerType;
