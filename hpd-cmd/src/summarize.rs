//! Summary of a saved production dynamics response.

use anyhow::Context;
use hpd_data::models::ProductionDynamicsResponse;
use hpd_data::palette::field_colors;
use hpd_data::series::{period_labels, running_total, y_axis_title};
use hpd_data::stats::summarize;
use hpd_utils::numbers::{format_series, format_value_for_display};
use log::info;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Render statistics cards, the field legend and one line per reporting period.
///
/// Period values share one axis scale; with `cumulative` they are running totals.
pub fn render_summary(response: &ProductionDynamicsResponse, cumulative: bool) -> anyhow::Result<String> {
    let mut lines = Vec::new();

    let summary = summarize(response);
    for card in summary.cards()? {
        lines.push(format!("{}: {}", card.title, card.value));
    }

    lines.push(String::new());
    let colors = field_colors(response.fields.len());
    for (field, color) in response.fields.iter().zip(colors) {
        let production = field.production_by_period.iter().fold(0.0, |acc, v| acc + v);
        lines.push(format!(
            "{} {} {}",
            color,
            field.field_name,
            format_value_for_display(production)?
        ));
    }

    let totals = if cumulative {
        running_total(&response.total.production_by_period)
    } else {
        response.total.production_by_period.clone()
    };
    let (scale, scaled) = format_series(&totals, response.unit())?;

    lines.push(String::new());
    lines.push(y_axis_title(response.fluid_type(), &scale.unit_label(response.unit())));
    for (label, value) in period_labels(response).iter().zip(&scaled) {
        lines.push(format!("{}: {}", label, value));
    }
    Ok(lines.join("\n"))
}

/// Render the summary and its statistic cards as pretty JSON.
pub fn render_summary_json(response: &ProductionDynamicsResponse) -> anyhow::Result<String> {
    let summary = summarize(response);
    let cards = summary.cards()?;
    serde_json::to_string_pretty(&json!({ "summary": summary, "cards": cards }))
        .context("Failed to serialize summary")
}

pub fn run_summarize(input: &Path, cumulative: bool, json: bool) -> anyhow::Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let response = ProductionDynamicsResponse::from_json(&content)
        .with_context(|| format!("Failed to parse response JSON in {}", input.display()))?;
    info!(
        "loaded {} fields over {} periods from {}",
        response.fields.len(),
        response.reporting_dates.len(),
        input.display()
    );
    let output = if json {
        render_summary_json(&response)?
    } else {
        render_summary(&response, cumulative)?
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = include_str!("../../hpd-data/testdata/dynamics_quarterly.json");

    fn sample() -> ProductionDynamicsResponse {
        serde_json::from_str(SAMPLE_RESPONSE).unwrap()
    }

    #[test]
    fn test_render_summary() {
        let output = render_summary(&sample(), false).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Total production: 4.2 million");
        assert_eq!(lines[4], "Top field: Yamburg (2.2 million)");
        assert_eq!(lines[6], "#003f7f Urengoy 2 million");
        assert_eq!(lines[7], "#0066cc Yamburg 2.2 million");
        assert_eq!(lines[9], "Gas production, million cubic meters");
        assert_eq!(lines[10], "2023-Q1: 1.5 million cubic meters");
        assert_eq!(lines[11], "2023-Q2: 2.7 million cubic meters");
    }

    #[test]
    fn test_render_summary_cumulative() {
        let output = render_summary(&sample(), true).unwrap();
        assert!(output.ends_with("2023-Q1: 1.5 million cubic meters\n2023-Q2: 4.2 million cubic meters"));
    }

    #[test]
    fn test_render_summary_json() {
        let output = render_summary_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["total_production"], 4_200_000.0);
        assert_eq!(value["summary"]["top_field"]["field_name"], "Yamburg");
        assert_eq!(value["cards"][0]["title"], "Total production");
        assert_eq!(value["cards"][0]["value"], "4.2 million");
        assert_eq!(value["cards"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_run_summarize_missing_file() {
        let err = run_summarize(Path::new("/nonexistent/response.json"), false, false).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
