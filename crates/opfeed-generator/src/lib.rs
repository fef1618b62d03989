//! Record generator for the opfeed synthetic operation feed.
//!
//! The [`FeedGenerator`] walks a date axis and, for every date, produces one
//! opening record followed by a fixed number of randomly sampled movement
//! records. The random source is an explicit `R: Rng` owned by the generator,
//! so a seeded `StdRng` reproduces the same feed across runs.
//!
//! # Architecture
//!
//! ```text
//! FeedConfig
//!      │
//!      ▼
//! ┌──────────────────┐
//! │  FeedGenerator   │
//! │                  │
//! │  - catalog       │
//! │  - cursor (date) │
//! │  - rng (R: Rng)  │
//! └────────┬─────────┘
//!          │ next_day()
//!          ▼
//!   DayBlock { date, opening, movements }
//!          │ records()
//!          ▼
//!   Record ─ Display ─▶ "2000-01-01:00:gr00.pr00:20.00:1:Note"
//! ```
//!
//! # Example
//!
//! ```rust
//! use opfeed_core::FeedConfig;
//! use opfeed_generator::FeedGenerator;
//!
//! let config = FeedConfig::default().with_days(2);
//! let mut generator = FeedGenerator::seeded(config, 42).unwrap();
//!
//! let first = generator.records().next().unwrap();
//! assert_eq!(first.to_string(), "2000-01-01:00:gr00.pr00:20.00:1:Note");
//! ```

pub mod cursor;
pub mod generator;

pub use cursor::DateCursor;
pub use generator::{DayBlock, FeedGenerator, GeneratorError, RecordIterator};
