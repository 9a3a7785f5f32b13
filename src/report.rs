//! Plain-text rendering of strategy reports.
//!
//! The core only produces raw [`Duration`]s; turning them into the
//! `MM min. SS sec. NNN ms` form and the per-strategy output block happens
//! here, at the presentation edge.

use crate::bench::StrategyReport;
use std::time::Duration;

/// Formats a duration as `MM min. SS sec. NNN ms`.
///
/// ```
/// use dialdex::report::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_millis(83_456)), "01 min. 23 sec. 456 ms");
/// assert_eq!(format_duration(Duration::from_millis(7)), "00 min. 00 sec. 07 ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_millis();
    let minutes = total / 60_000;
    let seconds = (total % 60_000) / 1_000;
    let millis = total % 1_000;
    format!("{minutes:02} min. {seconds:02} sec. {millis:02} ms")
}

/// Renders one strategy's output block.
///
/// Single-phase strategies print only the header and total; multi-phase
/// strategies add one line per phase. A fallback run marks its sorting
/// line with the stop notice.
pub fn render(report: &StrategyReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Start searching ({})...\n", report.strategy));
    out.push_str(&format!(
        "Found {} / {}. Time taken: {}.\n",
        report.found,
        report.query_count,
        format_duration(report.total())
    ));

    if report.phases.len() > 1 {
        for phase in &report.phases {
            out.push_str(&format!(
                "{} time: {}.",
                phase.label,
                format_duration(phase.duration)
            ));
            if report.fell_back && phase.label == "Sorting" {
                out.push_str(" - STOPPED, moved to linear search");
            }
            out.push('\n');
        }
    }

    out
}
