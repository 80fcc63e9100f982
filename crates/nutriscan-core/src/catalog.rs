//! # Annotation Catalog
//!
//! The Lookup Service: a static mapping from barcode string to nutrition
//! annotation, built once at startup.
//!
//! ## Lookup Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Catalog::describe(code)                       │
//! │                                                                 │
//! │  Decoder emits: "8901014004133"                                 │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Exact-match HashMap lookup (no normalization, no partials)     │
//! │       │                                                         │
//! │       ├── hit  ──► LookupResult::Found(annotation)              │
//! │       │                                                         │
//! │       └── miss ──► LookupResult::NotFound { code }              │
//! │                                                                 │
//! │  Pure, synchronous, infallible. A miss is a normal result.      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is injected by the caller (the app shell loads it from
//! JSON), so a larger or externally-loaded catalog can be substituted
//! without touching the session controller.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{Annotation, LookupResult};

/// In-memory product catalog keyed by barcode.
///
/// ## Invariants
/// - Every code is unique (enforced at construction)
/// - Records are immutable once the catalog is built
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: HashMap<String, Annotation>,
}

impl Catalog {
    /// Builds a catalog from annotation records.
    ///
    /// Returns [`CoreError::DuplicateCode`] if two records share a barcode.
    pub fn from_records(records: impl IntoIterator<Item = Annotation>) -> CoreResult<Self> {
        let mut map = HashMap::new();
        for record in records {
            let code = record.code.clone();
            if map.insert(code.clone(), record).is_some() {
                return Err(CoreError::DuplicateCode(code));
            }
        }
        Ok(Catalog { records: map })
    }

    /// Builds a catalog from a JSON array of annotation records.
    ///
    /// This is how the app shell loads the shipped catalog file.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let records: Vec<Annotation> = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Self::from_records(records)
    }

    /// Looks up the annotation for a barcode.
    ///
    /// The input is whatever raw string the decoder emitted - no
    /// validation, no normalization, exact match only.
    pub fn describe(&self, code: &str) -> LookupResult {
        match self.records.get(code) {
            Some(annotation) => LookupResult::Found(annotation.clone()),
            None => LookupResult::NotFound {
                code: code.to_string(),
            },
        }
    }

    /// Returns true if the catalog contains the given barcode.
    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_annotation(code: &str, name: &str) -> Annotation {
        Annotation {
            code: code.to_string(),
            name: name.to_string(),
            excessive: "Fat(Saturated and Trans), Protein, Sodium".to_string(),
            moderate: "Carbohydrates, Added Sugar".to_string(),
            lacking: "Dietary Fiber, Vitamins".to_string(),
            potential_problems: "Obesity, Heart risks".to_string(),
        }
    }

    #[test]
    fn test_describe_returns_stored_annotation() {
        let record = test_annotation(
            "8901014004133",
            "Nissin Cup Noodles - Italian Delight Flavor",
        );
        let catalog = Catalog::from_records([record.clone()]).unwrap();

        assert_eq!(catalog.describe("8901014004133"), LookupResult::Found(record));
    }

    #[test]
    fn test_describe_miss_carries_queried_code() {
        let catalog =
            Catalog::from_records([test_annotation("8901014004133", "Cup Noodles")]).unwrap();

        assert_eq!(
            catalog.describe("0000000000000"),
            LookupResult::NotFound {
                code: "0000000000000".to_string()
            }
        );
    }

    #[test]
    fn test_describe_is_exact_match_only() {
        let catalog =
            Catalog::from_records([test_annotation("8901014004133", "Cup Noodles")]).unwrap();

        // No trimming, no prefix matching.
        assert!(!catalog.describe("8901014004133 ").is_found());
        assert!(!catalog.describe("890101400413").is_found());
        assert!(!catalog.describe("").is_found());
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let result = Catalog::from_records([
            test_annotation("8901719134852", "Parle-g Gluco Biscuits"),
            test_annotation("8901719134852", "Some Other Biscuits"),
        ]);

        assert!(matches!(
            result,
            Err(CoreError::DuplicateCode(code)) if code == "8901719134852"
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "code": "8901719134852",
                "name": "Parle-g Gluco Biscuits",
                "excessive": "Calories, Carbohydrates, Sugars, Saturated Fat",
                "moderate": "Protein, Fat",
                "lacking": "Dietary Fiber, Trans Fat, Sodium",
                "potential_problems": "Obesity, Metabolic Issues"
            }
        ]"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("8901719134852"));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_data() {
        assert!(matches!(
            Catalog::from_json_str("{ not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records([]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(!catalog.describe("8901014004133").is_found());
    }
}
