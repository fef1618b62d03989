//! Core types for the opfeed synthetic operation feed.
//!
//! This crate holds the data model shared by the generator and the CLI:
//!
//! - [`ProductId`] and the fixed [`Catalog`] of identifiers
//! - [`Record`] and [`RecordKind`], whose `Display` impl is the feed line format
//! - [`FeedConfig`], the YAML-loadable description of a feed
//!
//! # Line format
//!
//! ```text
//! <ISO-date>:00:<product-id>:<amount>:<flag>:Note
//! 2000-01-01:00:gr00.pr00:20.00:1:Note
//! ```

pub mod catalog;
pub mod config;
pub mod record;

pub use catalog::{Catalog, ProductId};
pub use config::{ConfigError, FeedConfig};
pub use record::{Record, RecordKind, LEDGER_FIELD, NOTE_FIELD};
