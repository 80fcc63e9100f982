//! # Domain Types
//!
//! Core domain types used throughout NutriScan.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌─────────────────────┐     ┌─────────────────────────────┐   │
//! │  │     Annotation      │     │        LookupResult         │   │
//! │  │  ─────────────────  │     │  ─────────────────────────  │   │
//! │  │  code (barcode)     │     │  Found(Annotation)          │   │
//! │  │  name               │     │  NotFound { code }          │   │
//! │  │  excessive          │     └─────────────────────────────┘   │
//! │  │  moderate           │                                       │
//! │  │  lacking            │     NotFound carries the queried      │
//! │  │  potential_problems │     code so callers can render it.    │
//! │  └─────────────────────┘                                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// A pre-authored nutrition-risk annotation for one product.
///
/// Annotations are immutable: loaded once at startup, never mutated.
///
/// ## Fields
/// - `code`: the product barcode as the decoder emits it - a string of
///   digits whose length varies per symbology (EAN-13, EAN-8, UPC, ...)
/// - `excessive`/`moderate`/`lacking`: free-text nutrient category
///   descriptions shown verbatim in the result overlay
/// - `potential_problems`: free-text health-risk description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique product identifier (barcode digits).
    pub code: String,

    /// Display name shown in the result overlay.
    pub name: String,

    /// Nutrients present in excessive amounts.
    pub excessive: String,

    /// Nutrients present in moderate amounts.
    pub moderate: String,

    /// Nutrients the product lacks.
    pub lacking: String,

    /// Health risks associated with the nutrient profile.
    pub potential_problems: String,
}

/// Outcome of a catalog lookup.
///
/// Absence is a valid, expected result, not a failure: `NotFound` carries
/// the queried code so the caller can render "barcode X not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The barcode matched a catalog record.
    Found(Annotation),

    /// No record for this barcode.
    NotFound {
        /// The code as queried, unmodified.
        code: String,
    },
}

impl LookupResult {
    /// Returns true if the lookup matched a record.
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_result_is_found() {
        let found = LookupResult::Found(Annotation {
            code: "8901719134852".to_string(),
            name: "Parle-g Gluco Biscuits".to_string(),
            excessive: "Calories".to_string(),
            moderate: "Protein".to_string(),
            lacking: "Dietary Fiber".to_string(),
            potential_problems: "Obesity".to_string(),
        });
        assert!(found.is_found());

        let missing = LookupResult::NotFound {
            code: "0000000000000".to_string(),
        };
        assert!(!missing.is_found());
    }

    #[test]
    fn test_annotation_json_round_trip_field_names() {
        // The catalog JSON shipped with the app uses snake_case keys.
        let json = r#"{
            "code": "8904089974844",
            "name": "Heritage Chocolate and Caramel Flavor",
            "excessive": "Calories, Calcium, Added Sugar",
            "moderate": "Carbohydrates, Protein",
            "lacking": "Fat, Dietary Fiber, Sodium, Preservatives",
            "potential_problems": "Obesity, Metabolic Issues"
        }"#;

        let annotation: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(annotation.code, "8904089974844");
        assert_eq!(annotation.potential_problems, "Obesity, Metabolic Issues");
    }
}
