//! Summary statistics for a production dynamics response.

use crate::models::ProductionDynamicsResponse;
use hpd_core::error::Result;
use hpd_utils::numbers::format_value_for_display;
use log::warn;
use serde::Serialize;

/// The field with the largest production over the whole range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopField {
    pub field_id: u32,
    pub field_name: String,
    pub production: f64,
}

/// Aggregates shown above the production chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of the per-period totals
    pub total_production: f64,
    pub total_fields: usize,
    pub total_periods: usize,
    /// `total_production / total_fields`, 0 when there are no fields
    pub average_per_field: f64,
    pub top_field: Option<TopField>,
}

/// A titled, formatted statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticCard {
    pub title: &'static str,
    pub value: String,
}

fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Reduce a response to its summary statistics.
pub fn summarize(response: &ProductionDynamicsResponse) -> Summary {
    let periods = response.reporting_dates.len();
    if response.metadata.response.total_periods != periods {
        warn!(
            "metadata declares {} periods but {} reporting dates were returned",
            response.metadata.response.total_periods, periods
        );
    }
    for field in &response.fields {
        if field.production_by_period.len() != periods {
            warn!(
                "field {} has {} values for {} periods",
                field.field_id,
                field.production_by_period.len(),
                periods
            );
        }
    }

    let total_production = sum(&response.total.production_by_period);
    let total_fields = response.metadata.response.total_fields;
    let average_per_field = if total_fields > 0 {
        total_production / total_fields as f64
    } else {
        0.0
    };

    let top_field = response
        .fields
        .iter()
        .map(|field| TopField {
            field_id: field.field_id,
            field_name: field.field_name.clone(),
            production: sum(&field.production_by_period),
        })
        .reduce(|best, candidate| {
            if candidate.production > best.production {
                candidate
            } else {
                best
            }
        });

    Summary {
        total_production,
        total_fields,
        total_periods: response.metadata.response.total_periods,
        average_per_field,
        top_field,
    }
}

impl Summary {
    /// The statistic cards, each value scaled on its own.
    pub fn cards(&self) -> Result<Vec<StatisticCard>> {
        let mut cards = vec![
            StatisticCard {
                title: "Total production",
                value: format_value_for_display(self.total_production)?,
            },
            StatisticCard {
                title: "Fields",
                value: self.total_fields.to_string(),
            },
            StatisticCard {
                title: "Periods",
                value: self.total_periods.to_string(),
            },
            StatisticCard {
                title: "Average per field",
                value: format_value_for_display(self.average_per_field)?,
            },
        ];
        if let Some(top) = &self.top_field {
            cards.push(StatisticCard {
                title: "Top field",
                value: format!(
                    "{} ({})",
                    top.field_name,
                    format_value_for_display(top.production)?
                ),
            });
        }
        Ok(cards)
    }
}
