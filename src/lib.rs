//! opfeed: a synthetic inventory/operation feed generator.
//!
//! The feed is a colon-delimited text stream with one opening record and
//! twenty random movement records per date, over five years from
//! 2000-01-01:
//!
//! ```text
//! 2000-01-01:00:gr00.pr00:20.00:1:Note
//! 2000-01-01:00:gr04.pr13:1.00:0:Note
//! ...
//! ```
//!
//! The data model lives in `opfeed-core`, generation in `opfeed-generator`;
//! this crate wires them to the command line and an output stream.

pub mod args;
pub mod emit;

pub use args::{resolve_seed, FeedArgs};
pub use emit::{emit_feed, EmitMetrics};

// Re-exports so integration tests and callers need only this crate.
pub use opfeed_core::{Catalog, FeedConfig, ProductId, Record, RecordKind};
pub use opfeed_generator::{DayBlock, FeedGenerator};
