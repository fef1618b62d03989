//! Main feed generator producing day blocks of records.

use crate::cursor::DateCursor;
use chrono::NaiveDate;
use opfeed_core::{Catalog, ConfigError, FeedConfig, ProductId, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Config does not fit its own catalog
    #[error("Invalid feed config: {0}")]
    Config(#[from] ConfigError),
}

/// All records emitted for one date: the opening record, then the movements.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBlock {
    pub date: NaiveDate,
    pub opening: Record,
    pub movements: Vec<Record>,
}

impl DayBlock {
    /// Records in emission order, opening first.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        std::iter::once(&self.opening).chain(self.movements.iter())
    }
}

/// Generator that walks the date axis and samples movement records.
///
/// The random source is passed in explicitly. Use [`FeedGenerator::seeded`]
/// for reproducible output.
pub struct FeedGenerator<R: Rng> {
    config: FeedConfig,
    /// Built once; never mutated
    catalog: Catalog,
    cursor: DateCursor,
    opening_product: ProductId,
    /// Validated to lie inside `catalog`
    movement_range: RangeInclusive<usize>,
    rng: R,
}

impl FeedGenerator<StdRng> {
    /// Create a generator backed by a `StdRng` seeded with `seed`.
    pub fn seeded(config: FeedConfig, seed: u64) -> Result<Self, GeneratorError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FeedGenerator<R> {
    /// Create a generator for `config` drawing randomness from `rng`.
    pub fn new(config: FeedConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;

        let catalog = config.catalog();
        let opening_product = catalog[config.opening_index];
        let movement_range = config.movement_index_min..=config.movement_index_max;
        let cursor = DateCursor::new(config.start_date, config.days);

        debug!(
            "Feed generator ready: {} dates from {}, {} products, movements from {:?}",
            config.days,
            config.start_date,
            catalog.len(),
            movement_range
        );

        Ok(Self {
            config,
            catalog,
            cursor,
            opening_product,
            movement_range,
            rng,
        })
    }

    /// Produce the block for the next date, or `None` once the axis is done.
    ///
    /// The whole block is held in memory; use [`FeedGenerator::records`] to
    /// stream dates with many movements.
    pub fn next_day(&mut self) -> Option<DayBlock> {
        let date = self.cursor.next()?;

        let opening = self.opening_for(date);
        let movements = (0..self.config.movements_per_day)
            .map(|_| self.draw_movement(date))
            .collect();

        Some(DayBlock {
            date,
            opening,
            movements,
        })
    }

    /// Lazily iterate all remaining records in emission order.
    ///
    /// Movements are drawn one at a time as the iterator advances.
    pub fn records(&mut self) -> RecordIterator<'_, R> {
        RecordIterator {
            generator: self,
            date: None,
            movements_left: 0,
        }
    }

    fn opening_for(&self, date: NaiveDate) -> Record {
        Record::opening(date, self.opening_product, self.config.opening_amount)
    }

    fn draw_movement(&mut self, date: NaiveDate) -> Record {
        let index = self.rng.gen_range(self.movement_range.clone());
        Record::movement(date, self.catalog[index], self.config.movement_amount)
    }

    /// Dates not yet produced.
    pub fn remaining_days(&self) -> usize {
        self.cursor.len()
    }

    /// Total records the full feed contains.
    pub fn total_records(&self) -> u64 {
        self.config.total_lines()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }
}

/// Iterator that yields records one by one without buffering a date's block.
pub struct RecordIterator<'a, R: Rng> {
    generator: &'a mut FeedGenerator<R>,
    /// Date whose movements are still being drawn
    date: Option<NaiveDate>,
    movements_left: u32,
}

impl<R: Rng> Iterator for RecordIterator<'_, R> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(date) = self.date.filter(|_| self.movements_left > 0) {
            self.movements_left -= 1;
            return Some(self.generator.draw_movement(date));
        }

        let date = self.generator.cursor.next()?;
        self.date = Some(date);
        self.movements_left = self.generator.config.movements_per_day;
        Some(self.generator.opening_for(date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per_day = self.generator.config.lines_per_day() as usize;
        let remaining = (self.movements_left as usize)
            .saturating_add(self.generator.remaining_days().saturating_mul(per_day));
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RecordIterator<'_, R> {}
