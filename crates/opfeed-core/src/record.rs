//! Feed records and their line format.

use crate::catalog::ProductId;
use chrono::NaiveDate;
use std::fmt;

/// Constant second field of every line.
pub const LEDGER_FIELD: &str = "00";

/// Constant last field of every line.
pub const NOTE_FIELD: &str = "Note";

/// Shape of a record within a day block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// The single baseline entry emitted first for each date
    Opening,
    /// A randomly sampled transaction following the opening record
    Movement,
}

impl RecordKind {
    /// Flag written in the fifth field.
    pub fn flag(self) -> u8 {
        match self {
            RecordKind::Opening => 1,
            RecordKind::Movement => 0,
        }
    }
}

/// One emitted feed record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub product: ProductId,
    pub amount: f64,
    pub kind: RecordKind,
}

impl Record {
    pub fn opening(date: NaiveDate, product: ProductId, amount: f64) -> Self {
        Self {
            date,
            product,
            amount,
            kind: RecordKind::Opening,
        }
    }

    pub fn movement(date: NaiveDate, product: ProductId, amount: f64) -> Self {
        Self {
            date,
            product,
            amount,
            kind: RecordKind::Movement,
        }
    }
}

/// Renders the line without its terminator.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{LEDGER_FIELD}:{}:{:.2}:{}:{NOTE_FIELD}",
            self.date.format("%Y-%m-%d"),
            self.product,
            self.amount,
            self.kind.flag()
        )
    }
}
