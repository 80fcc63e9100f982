//! # Session Configuration
//!
//! Timing constants for the session controller plus pass-through
//! configuration for the decoder collaborator.
//!
//! ## Timing Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Detection Timing Windows                     │
//! │                                                                 │
//! │  t=0        accepted detection                                  │
//! │  │          cooldown_active = true, overlay hidden              │
//! │  │                                                              │
//! │  t=500ms    hide_delay elapsed ──► lookup + populate content    │
//! │  │                                                              │
//! │  t=600ms    reveal_delay elapsed ──► overlay shown              │
//! │  │                                                              │
//! │  t=3000ms   cooldown elapsed ──► next detection accepted        │
//! │                                                                 │
//! │  INVARIANT: cooldown > hide_delay + reveal_delay, so a second   │
//! │  result pipeline can never start while one is in flight.        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ScanError, ScanResult};

/// Cooldown applied after each accepted detection.
///
/// Earlier builds documented this debounce as 1.5s while scheduling 3s;
/// 3s has always been the shipped behavior and is the contract here.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(3000);

/// Delay between hiding the overlay and performing the lookup, giving the
/// hide animation time to complete.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(500);

/// Delay between populating overlay content and revealing it.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(100);

// =============================================================================
// Decoder Pass-Through Configuration
// =============================================================================

/// Barcode symbologies the decoder should recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    /// EAN-13 (13-digit European Article Number).
    ///
    /// serde's snake_case puts no underscore before digits, so the
    /// digit-suffixed variants carry explicit renames to keep the wire
    /// names aligned with `Display`.
    #[serde(rename = "ean_13")]
    Ean13,
    /// EAN-8 (short-form EAN).
    #[serde(rename = "ean_8")]
    Ean8,
    /// UPC-A (12-digit Universal Product Code).
    UpcA,
    /// UPC-E (zero-suppressed UPC).
    UpcE,
    /// Code 128 (variable-length alphanumeric).
    #[serde(rename = "code_128")]
    Code128,
}

impl Symbology {
    /// All symbologies enabled by default.
    pub const ALL: [Symbology; 5] = [
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Code128,
    ];
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbology::Ean13 => write!(f, "ean_13"),
            Symbology::Ean8 => write!(f, "ean_8"),
            Symbology::UpcA => write!(f, "upc_a"),
            Symbology::UpcE => write!(f, "upc_e"),
            Symbology::Code128 => write!(f, "code_128"),
        }
    }
}

/// Which camera the decoder should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Front-facing camera.
    User,
    /// Rear-facing camera (the default for scanning shelf products).
    #[default]
    Environment,
}

/// Target video constraints for the camera stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConstraints {
    /// Requested frame width in pixels.
    pub width: u32,

    /// Requested frame height in pixels.
    pub height: u32,

    /// Preferred camera.
    pub facing_mode: FacingMode,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        VideoConstraints {
            width: 640,
            height: 480,
            facing_mode: FacingMode::Environment,
        }
    }
}

/// Configuration handed to the decoder collaborator at initialization.
///
/// This is pass-through configuration, not part of the controller's own
/// contract: the controller forwards it to [`BarcodeDecoder::initialize`]
/// and never inspects it afterwards.
///
/// [`BarcodeDecoder::initialize`]: crate::decoder::BarcodeDecoder::initialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Symbologies to recognize.
    pub symbologies: Vec<Symbology>,

    /// Target video constraints.
    pub video: VideoConstraints,

    /// Worker-count hint for frame analysis.
    pub workers: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            symbologies: Symbology::ALL.to_vec(),
            video: VideoConstraints::default(),
            workers: 4,
        }
    }
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Configuration for a scan session.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Debounce window after each accepted detection.
    pub cooldown: Duration,

    /// Delay between hiding the overlay and performing the lookup.
    pub hide_delay: Duration,

    /// Delay between populating content and revealing the overlay.
    pub reveal_delay: Duration,

    /// Pass-through configuration for the decoder collaborator.
    pub decoder: DecoderConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            cooldown: DEFAULT_COOLDOWN,
            hide_delay: DEFAULT_HIDE_DELAY,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            decoder: DecoderConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Validates the timing constants.
    ///
    /// The cooldown guard is what keeps result pipelines from overlapping:
    /// a second pipeline can only be scheduled once the cooldown window has
    /// elapsed, so the cooldown must outlast the full hide-then-reveal
    /// sequence. Tuning the constants must not break that.
    pub fn validate(&self) -> ScanResult<()> {
        if self.cooldown <= self.hide_delay + self.reveal_delay {
            return Err(ScanError::InvalidConfig(format!(
                "cooldown ({:?}) must exceed hide_delay + reveal_delay ({:?})",
                self.cooldown,
                self.hide_delay + self.reveal_delay
            )));
        }
        if self.cooldown.is_zero() {
            return Err(ScanError::InvalidConfig(
                "cooldown must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_values() {
        let config = ScanConfig::default();
        assert_eq!(config.cooldown, Duration::from_millis(3000));
        assert_eq!(config.hide_delay, Duration::from_millis(500));
        assert_eq!(config.reveal_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cooldown_must_outlast_reveal_sequence() {
        let config = ScanConfig {
            cooldown: Duration::from_millis(400),
            hide_delay: Duration::from_millis(500),
            reveal_delay: Duration::from_millis(100),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_default_decoder_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.symbologies.len(), 5);
        assert_eq!(config.video.width, 640);
        assert_eq!(config.video.height, 480);
        assert_eq!(config.video.facing_mode, FacingMode::Environment);
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_symbology_display_names() {
        assert_eq!(Symbology::Ean13.to_string(), "ean_13");
        assert_eq!(Symbology::Code128.to_string(), "code_128");
    }

    #[test]
    fn test_symbology_serde_names_match_display() {
        for symbology in Symbology::ALL {
            let json = serde_json::to_string(&symbology).unwrap();
            assert_eq!(json, format!("\"{}\"", symbology));

            let parsed: Symbology = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, symbology);
        }
    }

    #[test]
    fn test_decoder_config_serde_round_trip() {
        let config = DecoderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"ean_13\""));
        assert!(json.contains("\"environment\""));

        let parsed: DecoderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
