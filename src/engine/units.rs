use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Physical-quantity group of a unit. Conversion is only defined within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitGroup {
    Mass,
    Volume,
    Count,
}

/// A recognized measurement unit.
///
/// `"stk"` is a legacy spelling for pieces; it deserializes to [`Unit::Pc`]
/// and always serializes back as `"pc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    G,
    Mg,
    L,
    Ml,
    #[serde(alias = "stk")]
    Pc,
}

impl Unit {
    pub const ALL: [Unit; 6] = [Unit::Kg, Unit::G, Unit::Mg, Unit::L, Unit::Ml, Unit::Pc];

    pub fn group(self) -> UnitGroup {
        match self {
            Unit::Kg | Unit::G | Unit::Mg => UnitGroup::Mass,
            Unit::L | Unit::Ml => UnitGroup::Volume,
            Unit::Pc => UnitGroup::Count,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Mg => "mg",
            Unit::L => "l",
            Unit::Ml => "ml",
            Unit::Pc => "pc",
        }
    }

    /// Parse a unit label (case-insensitive, legacy spellings included).
    pub fn parse(s: &str) -> Option<Unit> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Some(Unit::Kg),
            "g" => Some(Unit::G),
            "mg" => Some(Unit::Mg),
            "l" => Some(Unit::L),
            "ml" => Some(Unit::Ml),
            "pc" | "stk" => Some(Unit::Pc),
            _ => None,
        }
    }

    /// Scale factor relative to the smallest unit of the group (mg, ml, pc).
    fn factor(self) -> f64 {
        match self {
            Unit::Kg => 1_000_000.0,
            Unit::G => 1_000.0,
            Unit::Mg => 1.0,
            Unit::L => 1_000.0,
            Unit::Ml => 1.0,
            Unit::Pc => 1.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert a quantity between compatible units.
///
/// Same-unit conversion returns the quantity unchanged. Fails when the units
/// belong to different groups or the quantity is not finite.
pub fn convert(qty: f64, from: Unit, to: Unit) -> Result<f64> {
    if !qty.is_finite() || from.group() != to.group() {
        return Err(PricingError::IncompatibleUnits(
            from.label().to_string(),
            to.label().to_string(),
        ));
    }

    if from == to {
        return Ok(qty);
    }

    Ok(qty * from.factor() / to.factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert(42.5, Unit::G, Unit::G).unwrap(), 42.5);
        assert_eq!(convert(7.0, Unit::Pc, Unit::Pc).unwrap(), 7.0);
    }

    #[test]
    fn test_mass_conversions() {
        assert_eq!(convert(250.0, Unit::G, Unit::Kg).unwrap(), 0.25);
        assert_eq!(convert(0.25, Unit::Kg, Unit::G).unwrap(), 250.0);
        assert_eq!(convert(500.0, Unit::Mg, Unit::G).unwrap(), 0.5);
        assert_eq!(convert(2.0, Unit::Kg, Unit::Mg).unwrap(), 2_000_000.0);
    }

    #[test]
    fn test_volume_conversions() {
        assert_eq!(convert(330.0, Unit::Ml, Unit::L).unwrap(), 0.33);
        assert_eq!(convert(1.5, Unit::L, Unit::Ml).unwrap(), 1500.0);
    }

    #[test]
    fn test_round_trip() {
        let there = convert(250.0, Unit::G, Unit::Kg).unwrap();
        let back = convert(there, Unit::Kg, Unit::G).unwrap();
        assert!((back - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_cross_group_fails() {
        assert!(convert(1.0, Unit::Ml, Unit::Pc).is_err());
        assert!(convert(1.0, Unit::Kg, Unit::L).is_err());
    }

    #[test]
    fn test_non_finite_qty_fails() {
        assert!(convert(f64::NAN, Unit::G, Unit::Kg).is_err());
        assert!(convert(f64::INFINITY, Unit::G, Unit::G).is_err());
    }

    #[test]
    fn test_legacy_piece_spelling() {
        assert_eq!(Unit::parse("stk"), Some(Unit::Pc));
        assert_eq!(Unit::parse("PC"), Some(Unit::Pc));

        let unit: Unit = serde_json::from_str("\"stk\"").unwrap();
        assert_eq!(unit, Unit::Pc);
        assert_eq!(serde_json::to_string(&unit).unwrap(), "\"pc\"");
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Unit::parse("oz"), None);
    }
}
