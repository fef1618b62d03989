//! Writes a generated feed to an output stream.

use anyhow::Context;
use opfeed_core::RecordKind;
use opfeed_generator::FeedGenerator;
use rand::Rng;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from an emit operation.
#[derive(Debug, Clone, Default)]
pub struct EmitMetrics {
    /// Number of lines written.
    pub lines_written: u64,
    /// Number of dates written.
    pub days_written: u64,
    /// Bytes written, line terminators included.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl EmitMetrics {
    /// Calculate lines per second.
    pub fn lines_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.lines_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write every remaining record of `generator` to `writer`, one per line.
///
/// Records are drawn lazily and each line is flushed as soon as it is
/// written, so an interrupted run leaves every emitted line on the stream.
/// Any write failure, a closed pipe included, aborts the run and is returned
/// to the caller.
pub fn emit_feed<R: Rng, W: Write>(
    generator: &mut FeedGenerator<R>,
    mut writer: W,
) -> anyhow::Result<EmitMetrics> {
    let start_time = Instant::now();
    let mut metrics = EmitMetrics::default();

    for record in generator.records() {
        let line = format!("{record}\n");
        let line_no = metrics.lines_written + 1;
        writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to write line {line_no}"))?;

        metrics.lines_written += 1;
        metrics.bytes_written += line.len() as u64;
        if record.kind == RecordKind::Opening {
            metrics.days_written += 1;
        }

        if metrics.lines_written % 10000 == 0 {
            debug!("Written {} lines", metrics.lines_written);
        }
    }

    metrics.total_duration = start_time.elapsed();

    info!(
        "Feed complete: {} lines over {} dates, {} bytes in {:?} ({:.2} lines/sec)",
        metrics.lines_written,
        metrics.days_written,
        metrics.bytes_written,
        metrics.total_duration,
        metrics.lines_per_second()
    );

    Ok(metrics)
}
