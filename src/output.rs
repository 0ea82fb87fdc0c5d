//! Report emission

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::EstimatorError;
use crate::stats::ProjectionStats;

/// Pretty-print the report with 2-space indentation, non-ASCII kept literal
pub fn render_report(stats: &ProjectionStats) -> Result<String, EstimatorError> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Write the report to `path`, or to stdout followed by a newline
pub fn write_report(stats: &ProjectionStats, path: Option<&Path>) -> Result<(), EstimatorError> {
    let rendered = render_report(stats)?;

    match path {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| EstimatorError::WriteReport {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::run;
    use tempfile::TempDir;

    fn sample_stats() -> ProjectionStats {
        ProjectionStats {
            elapsed_seconds: 0.25,
            ..run([r#"{"code": "123", "product_name": "Milk", "brands": "Acme,Co"}"#], 0)
        }
    }

    #[test]
    fn test_render_report_is_indented_two_spaces() {
        let rendered = render_report(&sample_stats()).unwrap();

        assert!(rendered.starts_with("{\n  \"total_records\": 1,\n"));
        assert!(rendered.contains("\n  \"nonempty_counts\": {\n    \"brand\": 1,\n"));
        assert!(rendered.contains("\"elapsed_seconds\": 0.25"));
        assert!(rendered.contains("\"avg_payload_bytes_per_projected_row\": 11.0"));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_report_round_trips() {
        let stats = sample_stats();
        let parsed: ProjectionStats = serde_json::from_str(&render_report(&stats).unwrap()).unwrap();
        assert_eq!(parsed, stats);
    }

    #[test]
    fn test_write_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");

        write_report(&sample_stats(), Some(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report(&sample_stats()).unwrap());
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.json");

        let result = write_report(&sample_stats(), Some(&path));
        assert!(matches!(result, Err(EstimatorError::WriteReport { .. })));
    }
}
