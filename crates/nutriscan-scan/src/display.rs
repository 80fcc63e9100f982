//! # Display Seam
//!
//! Trait seam for the UI surface: elements for product name, barcode,
//! nutrient text, and overlay visibility. The controller treats these as
//! write-only sinks and never reads UI state back.
//!
//! Also home to the overlay text formatting, kept out of the controller so
//! the exact strings can be tested without a running session.

use nutriscan_core::Annotation;

/// Write-only sink for the result overlay.
///
/// Implementations must be cheap and non-blocking: every method is called
/// from the session event loop. `NoOpDisplay` is provided for tests.
pub trait ResultDisplay: Send + Sync {
    /// Sets the product-name field.
    fn set_product_name(&self, text: &str);

    /// Clears the product-name field (lookup miss).
    fn clear_product_name(&self);

    /// Sets the barcode field.
    fn set_barcode(&self, text: &str);

    /// Sets the nutrient text block.
    fn set_nutrients(&self, text: &str);

    /// Slides the result overlay into view.
    fn show_overlay(&self);

    /// Slides the result overlay off screen.
    fn hide_overlay(&self);

    /// Surfaces a blocking error notification (decoder init failure).
    fn show_error(&self, message: &str);
}

/// No-op display for testing.
pub struct NoOpDisplay;

impl ResultDisplay for NoOpDisplay {
    fn set_product_name(&self, _text: &str) {}
    fn clear_product_name(&self) {}
    fn set_barcode(&self, _text: &str) {}
    fn set_nutrients(&self, _text: &str) {}
    fn show_overlay(&self) {}
    fn hide_overlay(&self) {}
    fn show_error(&self, _message: &str) {}
}

// =============================================================================
// Overlay Text Formatting
// =============================================================================

/// Formats the product-name field.
pub fn format_product_name(name: &str) -> String {
    format!("Name: {}", name)
}

/// Formats the barcode field.
pub fn format_barcode(code: &str) -> String {
    format!("Barcode: {}", code)
}

/// Formats the nutrient text block for a matched product.
pub fn format_nutrients(annotation: &Annotation) -> String {
    format!(
        "Excessive: {}\nModerate: {}\nLacking: {}\nPotential Problems: {}",
        annotation.excessive, annotation.moderate, annotation.lacking,
        annotation.potential_problems
    )
}

/// Formats the nutrient text block for a lookup miss.
pub fn format_not_found(code: &str) -> String {
    format!("Product with barcode {} not found in database.", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_product_name() {
        assert_eq!(
            format_product_name("Nissin Cup Noodles - Italian Delight Flavor"),
            "Name: Nissin Cup Noodles - Italian Delight Flavor"
        );
    }

    #[test]
    fn test_format_barcode() {
        assert_eq!(format_barcode("8901014004133"), "Barcode: 8901014004133");
    }

    #[test]
    fn test_format_nutrients() {
        let annotation = Annotation {
            code: "8901014004133".to_string(),
            name: "Nissin Cup Noodles - Italian Delight Flavor".to_string(),
            excessive: "Fat(Saturated and Trans), Protein, Sodium".to_string(),
            moderate: "Carbohydrates, Added Sugar".to_string(),
            lacking: "Dietary Fiber, Vitamins".to_string(),
            potential_problems: "Obesity, Heart risks, Metabolic Issues, Hypertension"
                .to_string(),
        };

        let text = format_nutrients(&annotation);
        assert_eq!(
            text,
            "Excessive: Fat(Saturated and Trans), Protein, Sodium\n\
             Moderate: Carbohydrates, Added Sugar\n\
             Lacking: Dietary Fiber, Vitamins\n\
             Potential Problems: Obesity, Heart risks, Metabolic Issues, Hypertension"
        );
    }

    #[test]
    fn test_format_not_found() {
        assert_eq!(
            format_not_found("0000000000000"),
            "Product with barcode 0000000000000 not found in database."
        );
    }
}
