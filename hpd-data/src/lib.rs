//! Production dynamics payloads and chart-ready series.
//!
//! This crate handles the analytics endpoint's request/response models and
//! reduces responses into forms suitable for charting and summary cards.

pub mod models;
pub mod stats;

/// Series processing for stacked and cumulative production charts.
pub mod series {
    use crate::models::ProductionDynamicsResponse;
    use hpd_core::error::Result;
    use hpd_core::vocabulary::FluidType;
    use hpd_utils::dates::format_period_label;
    use hpd_utils::numbers::{choose_scale, Scale};

    /// Cumulative sums of `values`.
    pub fn running_total(values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .scan(0.0, |acc, v| {
                *acc += v;
                Some(*acc)
            })
            .collect()
    }

    /// Largest absolute per-period total, i.e. the tallest stacked bar.
    pub fn max_period_total(response: &ProductionDynamicsResponse) -> f64 {
        response
            .total
            .production_by_period
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Shared y-axis scale for a stacked chart of `response`.
    pub fn axis_scale(response: &ProductionDynamicsResponse) -> Result<Scale> {
        choose_scale(max_period_total(response))
    }

    /// Y-axis title, e.g. "Gas production, million cubic meters".
    pub fn y_axis_title(fluid: FluidType, unit_label: &str) -> String {
        let substance = match fluid {
            FluidType::Gas => "Gas",
            FluidType::Oil => "Oil",
            FluidType::Condensate => "Condensate",
        };
        format!("{} production, {}", substance, unit_label)
    }

    /// X-axis labels for the response's reporting periods.
    pub fn period_labels(response: &ProductionDynamicsResponse) -> Vec<String> {
        let step = response.aggregation_step();
        response
            .reporting_dates
            .iter()
            .map(|key| format_period_label(key, step))
            .collect()
    }

}

/// Field colour palette for chart datasets
pub mod palette {
    /// Corporate palette; fields beyond its length reuse colours from the start.
    pub const FIELD_COLORS: [&str; 15] = [
        "#003f7f", "#0066cc", "#4d94ff", "#80b3ff", "#b3d1ff", "#006600", "#33cc33", "#66ff66",
        "#666666", "#999999", "#cccccc", "#004d4d", "#008080", "#00cccc", "#4dffff",
    ];

    /// One colour per field, cycling through [`FIELD_COLORS`].
    pub fn field_colors(field_count: usize) -> Vec<&'static str> {
        FIELD_COLORS.iter().copied().cycle().take(field_count).collect()
    }

}
