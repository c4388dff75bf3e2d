//! Date utility functions

use chrono::NaiveDate;
use hpd_core::calendar_month::CalendarMonth;
use hpd_core::vocabulary::AggregationStep;

/// Format a month as "MM/YYYY" for display next to filter widgets
pub fn format_month_display(month: &CalendarMonth) -> String {
    format!("{:02}/{:04}", month.month(), month.year())
}

/// Turn a reporting period key into an x-axis label.
///
/// Monthly keys ("2023-01") become "Jan 2023". Quarterly ("2023-Q1") and
/// yearly ("2023") keys are already readable and pass through, as does any
/// monthly key that does not parse.
pub fn format_period_label(key: &str, step: AggregationStep) -> String {
    match step {
        AggregationStep::Monthly => {
            match NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d") {
                Ok(date) => date.format("%b %Y").to_string(),
                Err(_) => key.to_string(),
            }
        }
        AggregationStep::Quarterly | AggregationStep::Yearly => key.to_string(),
    }
}
