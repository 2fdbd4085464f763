// ABOUTME: Best-match selection over upstream candidates and calorie extraction
// ABOUTME: Ranks by data type preference then score, keeping the first with usable energy data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Lookup Contributors

//! # Best-Match Selection
//!
//! Candidates are ordered by [`compare_candidates`]: data type preference first
//! (Foundation, then SR Legacy, then Branded, then anything else), and within
//! the same data type by descending relevance score. The first candidate in
//! that order whose energy entry yields a positive whole number of kcal wins.
//!
//! Qualification and extraction share one predicate, [`usable_calories`], so a
//! candidate is never chosen and then rejected afterwards.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use calorie_core::constants::usda::ENERGY_NUTRIENT_ID;
use calorie_core::models::FoodRecord;

use crate::external::CandidateFood;

/// Ordering used for best-match selection; `Less` means preferred
#[must_use]
pub fn compare_candidates(a: &CandidateFood, b: &CandidateFood) -> Ordering {
    a.data_type()
        .priority()
        .cmp(&b.data_type().priority())
        .then_with(|| b.relevance().total_cmp(&a.relevance()))
}

/// Calories per 100 g carried by `candidate`, if usable
///
/// Only the first energy entry is examined. Its value must be present, finite,
/// and still positive after rounding half away from zero.
#[must_use]
pub fn usable_calories(candidate: &CandidateFood) -> Option<NonZeroU32> {
    let energy = candidate
        .nutrients()
        .iter()
        .find(|n| n.nutrient_id == Some(ENERGY_NUTRIENT_ID))?;
    let value = energy.value.filter(|v| v.is_finite() && *v > 0.0)?;
    NonZeroU32::new(round_kcal(value))
}

fn round_kcal(value: f64) -> u32 {
    // f64::round rounds half away from zero; the cast saturates
    value.round() as u32
}

/// Winning candidate with its extracted energy value
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// Selected candidate
    pub candidate: CandidateFood,
    /// Rounded energy per 100 g
    pub calories_per_100g: NonZeroU32,
}

impl BestMatch {
    /// Normalize into a [`FoodRecord`], falling back to `query` for a missing description
    #[must_use]
    pub fn into_record(self, query: &str) -> FoodRecord {
        let data_type = self.candidate.data_type();
        FoodRecord::new(
            self.candidate.description,
            query,
            self.calories_per_100g,
            self.candidate.serving_size,
            self.candidate.serving_size_unit,
            data_type,
        )
    }
}

/// Pick the preferred candidate that carries usable calorie data
///
/// Returns `None` when the list is empty or no candidate qualifies.
#[must_use]
pub fn select_best_match(mut candidates: Vec<CandidateFood>) -> Option<BestMatch> {
    // Stable sort: full ties keep upstream order
    candidates.sort_by(compare_candidates);
    candidates.into_iter().find_map(|candidate| {
        usable_calories(&candidate).map(|calories_per_100g| BestMatch {
            candidate,
            calories_per_100g,
        })
    })
}
