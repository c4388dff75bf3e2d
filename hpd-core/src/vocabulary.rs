//! Closed vocabularies used by filters, requests and labels.
//!
//! Serde uses the analytics backend's wire spellings; `FromStr` accepts
//! either the English name (case-insensitive) or the wire value.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The substance being measured.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FluidType {
    #[default]
    #[serde(rename = "газ")]
    Gas,
    #[serde(rename = "нефть")]
    Oil,
    #[serde(rename = "конденсат")]
    Condensate,
}

impl FluidType {
    pub const ALL: [FluidType; 3] = [FluidType::Gas, FluidType::Oil, FluidType::Condensate];

    pub fn as_str(&self) -> &'static str {
        match self {
            FluidType::Gas => "gas",
            FluidType::Oil => "oil",
            FluidType::Condensate => "condensate",
        }
    }

    pub fn wire_value(&self) -> &'static str {
        match self {
            FluidType::Gas => "газ",
            FluidType::Oil => "нефть",
            FluidType::Condensate => "конденсат",
        }
    }
}

/// Geological stratum classification used to attribute production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SedimentComplex {
    #[serde(rename = "турон")]
    Turon,
    #[serde(rename = "сеноман")]
    Senoman,
    #[serde(rename = "неоком")]
    Neokom,
    #[serde(rename = "ачимовка")]
    Achimov,
}

impl SedimentComplex {
    pub const ALL: [SedimentComplex; 4] = [
        SedimentComplex::Turon,
        SedimentComplex::Senoman,
        SedimentComplex::Neokom,
        SedimentComplex::Achimov,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SedimentComplex::Turon => "turon",
            SedimentComplex::Senoman => "senoman",
            SedimentComplex::Neokom => "neokom",
            SedimentComplex::Achimov => "achimov",
        }
    }

    pub fn wire_value(&self) -> &'static str {
        match self {
            SedimentComplex::Turon => "турон",
            SedimentComplex::Senoman => "сеноман",
            SedimentComplex::Neokom => "неоком",
            SedimentComplex::Achimov => "ачимовка",
        }
    }
}

/// Time-bucket granularity used to group production values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AggregationStep {
    #[serde(rename = "месяц")]
    Monthly,
    #[serde(rename = "квартал")]
    Quarterly,
    #[default]
    #[serde(rename = "год")]
    Yearly,
}

impl AggregationStep {
    pub const ALL: [AggregationStep; 3] = [
        AggregationStep::Monthly,
        AggregationStep::Quarterly,
        AggregationStep::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationStep::Monthly => "monthly",
            AggregationStep::Quarterly => "quarterly",
            AggregationStep::Yearly => "yearly",
        }
    }

    pub fn wire_value(&self) -> &'static str {
        match self {
            AggregationStep::Monthly => "месяц",
            AggregationStep::Quarterly => "квартал",
            AggregationStep::Yearly => "год",
        }
    }
}

/// Base measurement unit of a production series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "м3", alias = "тыс. м³")]
    CubicMeters,
    #[serde(rename = "т")]
    Tons,
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::CubicMeters, Unit::Tons];

    /// Gas is measured by volume, liquids by mass.
    pub fn for_fluid(fluid: FluidType) -> Unit {
        match fluid {
            FluidType::Gas => Unit::CubicMeters,
            FluidType::Oil | FluidType::Condensate => Unit::Tons,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::CubicMeters => "cubic meters",
            Unit::Tons => "tons",
        }
    }

    pub fn wire_value(&self) -> &'static str {
        match self {
            Unit::CubicMeters => "м3",
            Unit::Tons => "т",
        }
    }
}

/// Match `s` against each variant's English name (case-insensitive) or wire value.
fn parse_variant<T: Copy>(
    kind: &'static str,
    s: &str,
    all: &[T],
    english: fn(&T) -> &'static str,
    wire: fn(&T) -> &'static str,
) -> Result<T, ParseError> {
    let trimmed = s.trim();
    all.iter()
        .find(|&&v| english(&v).eq_ignore_ascii_case(trimmed) || wire(&v) == trimmed)
        .copied()
        .ok_or_else(|| ParseError::new(kind, s))
}

impl FromStr for FluidType {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("fluid type", s, &Self::ALL, Self::as_str, Self::wire_value)
    }
}

impl FromStr for SedimentComplex {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("sediment complex", s, &Self::ALL, Self::as_str, Self::wire_value)
    }
}

impl FromStr for AggregationStep {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("aggregation step", s, &Self::ALL, Self::as_str, Self::wire_value)
    }
}

impl FromStr for Unit {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("unit", s, &Self::ALL, Self::as_str, Self::wire_value)
    }
}

impl fmt::Display for FluidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SedimentComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AggregationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_and_wire_names() {
        assert_eq!("gas".parse::<FluidType>().unwrap(), FluidType::Gas);
        assert_eq!("OIL".parse::<FluidType>().unwrap(), FluidType::Oil);
        assert_eq!("конденсат".parse::<FluidType>().unwrap(), FluidType::Condensate);
        assert_eq!(" achimov ".parse::<SedimentComplex>().unwrap(), SedimentComplex::Achimov);
        assert_eq!("сеноман".parse::<SedimentComplex>().unwrap(), SedimentComplex::Senoman);
        assert_eq!("Quarterly".parse::<AggregationStep>().unwrap(), AggregationStep::Quarterly);
        assert_eq!("т".parse::<Unit>().unwrap(), Unit::Tons);
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = "water".parse::<FluidType>().unwrap_err();
        assert_eq!(err.kind, "fluid type");
        assert_eq!(err.input, "water");
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&FluidType::Oil).unwrap();
        assert_eq!(json, "\"нефть\"");
        let step: AggregationStep = serde_json::from_str("\"квартал\"").unwrap();
        assert_eq!(step, AggregationStep::Quarterly);
        let unit: Unit = serde_json::from_str("\"тыс. м³\"").unwrap();
        assert_eq!(unit, Unit::CubicMeters);
    }

    #[test]
    fn test_unit_for_fluid() {
        assert_eq!(Unit::for_fluid(FluidType::Gas), Unit::CubicMeters);
        assert_eq!(Unit::for_fluid(FluidType::Oil), Unit::Tons);
        assert_eq!(Unit::for_fluid(FluidType::Condensate), Unit::Tons);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FluidType::default(), FluidType::Gas);
        assert_eq!(AggregationStep::default(), AggregationStep::Yearly);
    }
}
