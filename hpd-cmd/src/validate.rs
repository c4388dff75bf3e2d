//! Filter selection validation command.

use anyhow::Context;
use hpd_core::filter::{is_range_valid, FilterSelection};
use hpd_data::models::ProductionDynamicsRequest;
use hpd_utils::dates::format_month_display;
use log::{info, warn};

/// Validate `selection` and render the request body it produces.
///
/// An incomplete selection is an error listing every reason.
pub fn render_request(selection: &FilterSelection) -> anyhow::Result<String> {
    if !is_range_valid(selection.date_from.as_ref(), selection.date_to.as_ref()) {
        warn!("date range is reversed");
    }
    let request = ProductionDynamicsRequest::from_selection(selection)?;
    if let (Some(from), Some(to)) = (&selection.date_from, &selection.date_to) {
        info!(
            "selection complete: {} fields, {} to {}",
            selection.field_ids.len(),
            format_month_display(from),
            format_month_display(to)
        );
    }
    serde_json::to_string_pretty(&request).context("Failed to serialize request")
}

pub fn run_validate(selection: &FilterSelection) -> anyhow::Result<()> {
    let body = render_request(selection)?;
    println!("{}", body);
    Ok(())
}
