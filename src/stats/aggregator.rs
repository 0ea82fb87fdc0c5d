use std::convert::Infallible;
use std::time::Instant;

use serde_json::Value;

use crate::json::parse_record;
use crate::projection::Projector;
use crate::stats::types::{FieldTotals, ProjectionStats};

/// Processed records between progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Streams JSONL lines through a [`Projector`] and accumulates size statistics
#[derive(Debug, Clone)]
pub struct Aggregator {
    projector: Projector,
    sample_limit: u64,
    progress_interval: u64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(Projector::default(), 0)
    }
}

impl Aggregator {
    /// `sample_limit` caps the number of parsed records; 0 means unbounded.
    pub fn new(projector: Projector, sample_limit: u64) -> Self {
        Self {
            projector,
            sample_limit,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Log progress every `interval` processed records; 0 disables it.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn sample_limit(&self) -> u64 {
        self.sample_limit
    }

    /// Consume lines from a source that cannot fail
    pub fn run<I, S>(&self, lines: I) -> ProjectionStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.try_run(lines.into_iter().map(Ok::<S, Infallible>)) {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    }

    /// Consume lines in order until the source is exhausted or the sample
    /// cap is reached
    ///
    /// Every line pulled before the cap trips counts toward `total_records`.
    /// Blank lines and lines that are not valid JSON count toward nothing
    /// else. A source error ends the run and no statistics are produced.
    pub fn try_run<I, S, E>(&self, lines: I) -> Result<ProjectionStats, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut totals = FieldTotals::default();

        for line in lines {
            let line = line?;
            if self.sample_limit > 0 && totals.processed >= self.sample_limit {
                log::debug!("Sample limit of {} records reached", self.sample_limit);
                break;
            }
            totals.total_records += 1;

            let raw = line.as_ref().trim();
            if raw.is_empty() {
                continue;
            }

            let record: Value = match parse_record(raw) {
                Ok(record) => record,
                Err(e) => {
                    log::trace!("Skipping line {}: {}", totals.total_records, e);
                    continue;
                }
            };

            let projection = self.projector.project(&record);
            totals.absorb(&projection);
            totals.processed += 1;

            if self.progress_interval > 0 && totals.processed % self.progress_interval == 0 {
                log::info!(
                    "Processed {} records ({} with barcode)",
                    totals.processed,
                    totals.projected_records_with_barcode
                );
            }
        }

        let elapsed = start.elapsed().as_secs_f64();
        log::debug!(
            "Finished: {} lines read, {} parsed, {} with barcode in {:.3}s (sample limit {}, image language {})",
            totals.total_records,
            totals.processed,
            totals.projected_records_with_barcode,
            elapsed,
            self.sample_limit(),
            self.projector.image_language()
        );

        Ok(totals.finish(elapsed))
    }
}

/// Run the default aggregator over `lines`
///
/// # Examples
/// ```
/// use off_estimator::stats::run;
///
/// let stats = run([r#"{"_id": "999"}"#, "", "not valid json{"], 0);
/// assert_eq!(stats.total_records, 3);
/// assert_eq!(stats.projected_records_with_barcode, 1);
/// assert_eq!(stats.barcode_bytes_total, 3);
/// ```
pub fn run<I, S>(lines: I, sample_limit: u64) -> ProjectionStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Aggregator::new(Projector::default(), sample_limit).run(lines)
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
