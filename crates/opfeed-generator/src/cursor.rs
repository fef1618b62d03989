//! Date axis of the feed.

use chrono::NaiveDate;

/// Iterator over `days` consecutive calendar dates starting at `start`.
#[derive(Debug, Clone)]
pub struct DateCursor {
    next: Option<NaiveDate>,
    remaining: u32,
}

impl DateCursor {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self {
            next: Some(start),
            remaining: days,
        }
    }
}

impl Iterator for DateCursor {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;

        self.remaining -= 1;
        self.next = current.succ_opt();
        // Past NaiveDate::MAX the axis simply ends.
        if self.next.is_none() {
            self.remaining = 0;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateCursor {}
