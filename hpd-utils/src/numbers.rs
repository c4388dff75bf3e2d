//! Human-scale formatting of production magnitudes.
//!
//! A chart axis must use one divisor for every tick, otherwise labels such
//! as "3 thousand" and "1.2 million" end up side by side. [`format_series`]
//! picks the tier once from the largest absolute value and applies it to the
//! whole series.

use hpd_core::error::{HpdError, Result};
use hpd_core::vocabulary::Unit;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Magnitude tier, chosen by [`choose_scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Scale {
    Base,
    Thousand,
    Million,
    Billion,
}

impl Scale {
    pub fn divisor(&self) -> f64 {
        match self {
            Scale::Base => 1.0,
            Scale::Thousand => 1e3,
            Scale::Million => 1e6,
            Scale::Billion => 1e9,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Scale::Base => "",
            Scale::Thousand => "thousand",
            Scale::Million => "million",
            Scale::Billion => "billion",
        }
    }

    /// Base unit combined with this tier's suffix, e.g. "million tons".
    pub fn unit_label(&self, unit: Unit) -> String {
        match self {
            Scale::Base => unit.as_str().to_string(),
            _ => format!("{} {}", self.suffix(), unit.as_str()),
        }
    }

    /// Axis tick label for `value` on an axis that shares this scale.
    pub fn tick_label(&self, value: f64) -> String {
        let scaled = round_one_decimal(value / self.divisor());
        format!("{} {}", scaled, self.suffix()).trim_end().to_string()
    }
}

/// A value expressed in a magnitude tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledMagnitude {
    /// Value divided by `divisor`, rounded to one decimal
    pub display_value: f64,
    pub scale_suffix: &'static str,
    pub unit_label: String,
    pub divisor: f64,
}

impl fmt::Display for ScaledMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_value, self.unit_label)
    }
}

/// Round half away from zero at one fractional digit. Never returns -0.0, so
/// small negatives print as "0".
fn round_one_decimal(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HpdError::InvalidMagnitude(value))
    }
}

/// Pick the tier for the largest value a caller intends to format.
/// Thresholds apply to the absolute value; the largest matching tier wins.
pub fn choose_scale(magnitude: f64) -> Result<Scale> {
    let abs = ensure_finite(magnitude)?.abs();
    let scale = if abs >= 1e9 {
        Scale::Billion
    } else if abs >= 1e6 {
        Scale::Million
    } else if abs >= 1e3 {
        Scale::Thousand
    } else {
        Scale::Base
    };
    Ok(scale)
}

/// Express `value` in `scale`, preserving sign.
pub fn format(value: f64, scale: Scale, unit: Unit) -> Result<ScaledMagnitude> {
    let value = ensure_finite(value)?;
    Ok(ScaledMagnitude {
        display_value: round_one_decimal(value / scale.divisor()),
        scale_suffix: scale.suffix(),
        unit_label: scale.unit_label(unit),
        divisor: scale.divisor(),
    })
}

/// Format every value with one scale chosen from the largest absolute value.
/// An empty series uses [`Scale::Base`].
pub fn format_series(values: &[f64], unit: Unit) -> Result<(Scale, Vec<ScaledMagnitude>)> {
    let max = values
        .iter()
        .map(|v| ensure_finite(*v).map(f64::abs))
        .try_fold(0.0_f64, |acc, v| v.map(|v| acc.max(v)))?;
    let scale = choose_scale(max)?;
    debug!(
        "scaling {} values (max {}) by {} ({:?})",
        values.len(),
        max,
        scale.divisor(),
        scale
    );
    let formatted = values
        .iter()
        .map(|v| format(*v, scale, unit))
        .collect::<Result<Vec<_>>>()?;
    Ok((scale, formatted))
}

/// Short label for a single value with its own tier, e.g. "2.5 billion" or "750".
pub fn format_value_for_display(value: f64) -> Result<String> {
    let scale = choose_scale(value)?;
    Ok(scale.tick_label(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_scale_thresholds() {
        assert_eq!(choose_scale(0.0).unwrap(), Scale::Base);
        assert_eq!(choose_scale(999.9).unwrap(), Scale::Base);
        assert_eq!(choose_scale(1_000.0).unwrap(), Scale::Thousand);
        assert_eq!(choose_scale(999_999.0).unwrap(), Scale::Thousand);
        assert_eq!(choose_scale(1e6).unwrap(), Scale::Million);
        assert_eq!(choose_scale(1e9).unwrap(), Scale::Billion);
        assert_eq!(choose_scale(4.2e12).unwrap(), Scale::Billion);
        assert_eq!(choose_scale(-2_000_000.0).unwrap(), Scale::Million);
    }

    #[test]
    fn test_choose_scale_rejects_non_finite() {
        assert_eq!(
            choose_scale(f64::INFINITY),
            Err(HpdError::InvalidMagnitude(f64::INFINITY))
        );
        assert!(matches!(
            choose_scale(f64::NAN),
            Err(HpdError::InvalidMagnitude(_))
        ));
    }

    #[test]
    fn test_choose_scale_is_monotonic() {
        let magnitudes = [0.0, 1.0, 999.0, 1_000.0, 5e4, 1e6 - 1.0, 1e6, 3e8, 1e9, 1e15];
        for pair in magnitudes.windows(2) {
            let a = choose_scale(pair[0]).unwrap();
            let b = choose_scale(pair[1]).unwrap();
            assert!(a.divisor() <= b.divisor(), "{:?} > {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_format_billion_cubic_meters() {
        let scaled = format(2_500_000_000.0, Scale::Billion, Unit::CubicMeters).unwrap();
        assert_eq!(scaled.display_value, 2.5);
        assert_eq!(scaled.unit_label, "billion cubic meters");
        assert_eq!(scaled.scale_suffix, "billion");
        assert_eq!(scaled.divisor, 1e9);
        assert_eq!(scaled.to_string(), "2.5 billion cubic meters");
    }

    #[test]
    fn test_format_base_tons() {
        let scaled = format(750.0, Scale::Base, Unit::Tons).unwrap();
        assert_eq!(scaled.display_value, 750.0);
        assert_eq!(scaled.unit_label, "tons");
        assert_eq!(scaled.scale_suffix, "");
        assert_eq!(scaled.divisor, 1.0);
    }

    #[test]
    fn test_format_negative_and_rounding() {
        let scaled = format(-1_250_000.0, Scale::Million, Unit::Tons).unwrap();
        assert_eq!(scaled.display_value, -1.3);
        assert_eq!(scaled.unit_label, "million tons");
        let scaled = format(1_249_999.0, Scale::Million, Unit::Tons).unwrap();
        assert_eq!(scaled.display_value, 1.2);
    }

    #[test]
    fn test_format_series_shares_scale() {
        let (scale, values) = format_series(&[100.0, 999_999.0], Unit::Tons).unwrap();
        assert_eq!(scale, Scale::Thousand);
        let display: Vec<f64> = values.iter().map(|v| v.display_value).collect();
        assert_eq!(display, vec![0.1, 1000.0]);
        assert!(values.iter().all(|v| v.divisor == 1e3 && v.unit_label == "thousand tons"));
    }

    #[test]
    fn test_format_series_small_values_follow_max() {
        let (scale, values) = format_series(&[500.0, 2_000_000.0], Unit::CubicMeters).unwrap();
        assert_eq!(scale, Scale::Million);
        assert_eq!(values[0].display_value, 0.0);
        assert_eq!(values[1].display_value, 2.0);
        assert_eq!(values[0].unit_label, values[1].unit_label);
        assert_eq!(values[0].divisor, values[1].divisor);
    }

    #[test]
    fn test_format_series_negative_max() {
        let (scale, values) = format_series(&[-3e9, 1e3], Unit::Tons).unwrap();
        assert_eq!(scale, Scale::Billion);
        assert_eq!(values[0].display_value, -3.0);
    }

    #[test]
    fn test_small_negative_rounds_to_plain_zero() {
        let (scale, values) = format_series(&[-40.0, 2e6], Unit::Tons).unwrap();
        assert_eq!(scale, Scale::Million);
        assert!(values[0].display_value.is_sign_positive());
        assert_eq!(values[0].to_string(), "0 million tons");
        assert_eq!(Scale::Million.tick_label(-40.0), "0 million");
        assert_eq!(format_value_for_display(-0.01).unwrap(), "0");
    }

    #[test]
    fn test_format_series_empty_and_invalid() {
        let (scale, values) = format_series(&[], Unit::Tons).unwrap();
        assert_eq!(scale, Scale::Base);
        assert!(values.is_empty());
        assert!(format_series(&[1.0, f64::NAN], Unit::Tons).is_err());
    }

    #[test]
    fn test_tick_label_and_display() {
        assert_eq!(Scale::Million.tick_label(1_500_000.0), "1.5 million");
        assert_eq!(Scale::Million.tick_label(0.0), "0 million");
        assert_eq!(Scale::Base.tick_label(42.0), "42");
        assert_eq!(format_value_for_display(2_500_000_000.0).unwrap(), "2.5 billion");
        assert_eq!(format_value_for_display(750.0).unwrap(), "750");
        assert!(format_value_for_display(f64::NEG_INFINITY).is_err());
    }
}
