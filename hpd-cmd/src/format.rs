//! Series scaling command.

use hpd_core::vocabulary::Unit;
use anyhow::Context;
use hpd_utils::numbers::format_series;
use serde_json::json;

/// Render `values` scaled by one shared tier, one line per value.
pub fn render_series(values: &[f64], unit: Unit) -> anyhow::Result<String> {
    let (scale, scaled) = format_series(values, unit)?;
    let mut lines = vec![format!(
        "scale: {:?} (divisor {})",
        scale,
        scale.divisor()
    )];
    for (raw, value) in values.iter().zip(&scaled) {
        lines.push(format!("{} -> {}", raw, value));
    }
    Ok(lines.join("\n"))
}

/// Render the shared scale and every scaled value as pretty JSON.
pub fn render_series_json(values: &[f64], unit: Unit) -> anyhow::Result<String> {
    let (scale, scaled) = format_series(values, unit)?;
    serde_json::to_string_pretty(&json!({ "scale": scale, "values": scaled }))
        .context("Failed to serialize scaled values")
}

pub fn run_format(values: &[f64], unit: Unit, json: bool) -> anyhow::Result<()> {
    let output = if json {
        render_series_json(values, unit)?
    } else {
        render_series(values, unit)?
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_series() {
        let output = render_series(&[100.0, 999_999.0], Unit::Tons).unwrap();
        assert_eq!(
            output,
            "scale: Thousand (divisor 1000)\n100 -> 0.1 thousand tons\n999999 -> 1000 thousand tons"
        );
    }

    #[test]
    fn test_render_series_json() {
        let output = render_series_json(&[-40.0, 2_500_000.0], Unit::CubicMeters).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scale"], "Million");
        assert_eq!(value["values"][0]["display_value"], 0.0);
        assert_eq!(value["values"][1]["display_value"], 2.5);
        assert_eq!(value["values"][1]["unit_label"], "million cubic meters");
        assert_eq!(value["values"][1]["divisor"], 1e6);
    }

    #[test]
    fn test_render_series_rejects_non_finite() {
        assert!(render_series(&[f64::NAN], Unit::Tons).is_err());
    }
}
