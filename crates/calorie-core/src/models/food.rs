// ABOUTME: Normalized food record and calorie estimate models
// ABOUTME: DataType categories for USDA records with their preference ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::constants::usda::{
    DATA_TYPE_BRANDED, DATA_TYPE_FOUNDATION, DATA_TYPE_SR_LEGACY, DEFAULT_SERVING_SIZE_GRAMS,
    DEFAULT_SERVING_UNIT, SOURCE_LABEL,
};

/// USDA data type category of a food record
///
/// Serialized using the upstream labels (`"Foundation"`, `"SR Legacy"`,
/// `"Branded"`); any other label deserializes as [`DataType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum DataType {
    /// Foundation foods (analytically measured)
    Foundation,
    /// Standard Reference legacy dataset
    SrLegacy,
    /// Branded commercial products
    Branded,
    /// Any category the engine does not rank explicitly
    Other,
}

impl DataType {
    /// Preference rank used by best-match selection; lower is better
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Foundation => 1,
            Self::SrLegacy => 2,
            Self::Branded => 3,
            Self::Other => 4,
        }
    }

    /// Category assumed when an upstream candidate omits its data type
    #[must_use]
    pub const fn assumed_when_missing() -> Self {
        Self::Branded
    }

    /// Upstream label for this category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => DATA_TYPE_FOUNDATION,
            Self::SrLegacy => DATA_TYPE_SR_LEGACY,
            Self::Branded => DATA_TYPE_BRANDED,
            Self::Other => "Other",
        }
    }

    /// Parse an upstream label, mapping unknown labels to `Other`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            DATA_TYPE_FOUNDATION => Self::Foundation,
            DATA_TYPE_SR_LEGACY => Self::SrLegacy,
            DATA_TYPE_BRANDED => Self::Branded,
            _ => Self::Other,
        }
    }
}

impl From<String> for DataType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<DataType> for &'static str {
    fn from(data_type: DataType) -> Self {
        data_type.as_str()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized result of a successful upstream lookup
///
/// `calories_per_100g` is non-zero by construction, so a record that reaches a
/// caller or the cache always carries usable energy data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Matched food description
    pub description: String,
    /// Energy per 100 g, rounded to whole kcal
    pub calories_per_100g: NonZeroU32,
    /// Size of one serving (grams unless `serving_unit` says otherwise)
    pub serving_size_grams: f64,
    /// Unit reported for the serving size
    pub serving_unit: String,
    /// Upstream data type category
    pub data_type: DataType,
    /// Source label
    pub source: String,
}

impl FoodRecord {
    /// Build a record, applying defaults for absent or unusable optional fields
    ///
    /// A missing or blank description falls back to `fallback_description`; a
    /// missing, non-finite or non-positive serving size falls back to 100 g; a
    /// missing or blank serving unit falls back to `"g"`.
    #[must_use]
    pub fn new(
        description: Option<String>,
        fallback_description: &str,
        calories_per_100g: NonZeroU32,
        serving_size: Option<f64>,
        serving_unit: Option<String>,
        data_type: DataType,
    ) -> Self {
        let description = description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| fallback_description.to_owned());
        let serving_size_grams = serving_size
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_SERVING_SIZE_GRAMS);
        let serving_unit = serving_unit
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVING_UNIT.to_owned());

        Self {
            description,
            calories_per_100g,
            serving_size_grams,
            serving_unit,
            data_type,
            source: SOURCE_LABEL.to_owned(),
        }
    }
}

/// Calorie estimate for a dish and serving count, returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieEstimate {
    /// Dish name as supplied by the caller
    pub dish_name: String,
    /// Number of servings requested
    pub servings: u32,
    /// Calories in one serving
    pub calories_per_serving: u32,
    /// Calories across all servings
    pub total_calories: u64,
    /// Source label of the underlying record
    pub source: String,
    /// Description of the matched upstream food
    pub matched_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kcal(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn test_data_type_priority_order() {
        assert!(DataType::Foundation.priority() < DataType::SrLegacy.priority());
        assert!(DataType::SrLegacy.priority() < DataType::Branded.priority());
        assert!(DataType::Branded.priority() < DataType::Other.priority());
    }

    #[test]
    fn test_data_type_uses_upstream_labels() {
        let parsed: Vec<DataType> =
            serde_json::from_str(r#"["Foundation","SR Legacy","Branded","Survey (FNDDS)"]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                DataType::Foundation,
                DataType::SrLegacy,
                DataType::Branded,
                DataType::Other
            ]
        );
        assert_eq!(
            serde_json::to_string(&DataType::SrLegacy).unwrap(),
            r#""SR Legacy""#
        );
    }

    #[test]
    fn test_food_record_applies_defaults() {
        let record = FoodRecord::new(
            None,
            "grilled chicken",
            kcal(165),
            None,
            None,
            DataType::Foundation,
        );
        assert_eq!(record.description, "grilled chicken");
        assert!((record.serving_size_grams - 100.0).abs() < f64::EPSILON);
        assert_eq!(record.serving_unit, "g");
        assert_eq!(record.source, "USDA FoodData Central");
    }

    #[test]
    fn test_food_record_rejects_unusable_serving_size() {
        for bad in [0.0, -20.0, f64::NAN, f64::INFINITY] {
            let record = FoodRecord::new(
                Some("Apple".to_owned()),
                "apple",
                kcal(52),
                Some(bad),
                Some(" ".to_owned()),
                DataType::SrLegacy,
            );
            assert!((record.serving_size_grams - 100.0).abs() < f64::EPSILON);
            assert_eq!(record.serving_unit, "g");
        }
    }

    #[test]
    fn test_food_record_zero_calories_cannot_deserialize() {
        let json = r#"{"description":"Water","calories_per_100g":0,"serving_size_grams":100.0,
            "serving_unit":"g","data_type":"Foundation","source":"USDA FoodData Central"}"#;
        assert!(serde_json::from_str::<FoodRecord>(json).is_err());
    }
}
