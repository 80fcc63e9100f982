//! # Decoder Seam
//!
//! Trait seam for the external barcode decoder collaborator - the
//! component that analyzes a live video stream and emits decoded barcode
//! strings. The controller treats it as an opaque service with a one-time
//! initialization call, start/stop calls, and a detection feed.
//!
//! ## Detection Delivery
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Detection Delivery                          │
//! │                                                                 │
//! │  ┌──────────────┐   mpsc::Sender<String>   ┌─────────────────┐ │
//! │  │   Decoder    │ ────────────────────────►│  ScanSession    │ │
//! │  │  (external)  │   decoded code strings   │  event loop     │ │
//! │  └──────────────┘                          └─────────────────┘ │
//! │                                                                 │
//! │  The session hands out the sender at spawn time; the decoder    │
//! │  implementation pushes every decoded frame into it. Events are  │
//! │  consumed strictly in arrival order.                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::error::ScanResult;

/// The external barcode decoder collaborator.
///
/// ## Contract
/// - `initialize` is asynchronous and performed at most once per process
///   lifetime; the controller tracks completion and never calls it again
///   after success. Failure (camera permission denied, no device) is
///   terminal for that start attempt.
/// - `activate`/`deactivate` resume and pause the camera stream. Both are
///   cheap, synchronous, and may be called once per session.
/// - Decoded strings are delivered through the mpsc sender returned by
///   [`ScanSession::spawn`], not through this trait.
///
/// [`ScanSession::spawn`]: crate::session::ScanSession::spawn
#[async_trait]
pub trait BarcodeDecoder: Send + Sync {
    /// One-time decoder initialization (camera acquisition, worker setup).
    async fn initialize(&self, config: &DecoderConfig) -> ScanResult<()>;

    /// Starts (or resumes) the camera stream.
    fn activate(&self);

    /// Pauses the camera stream.
    fn deactivate(&self);
}

/// No-op decoder for tests and headless shells.
///
/// Initialization always succeeds; activation and deactivation only log.
pub struct NoOpDecoder;

#[async_trait]
impl BarcodeDecoder for NoOpDecoder {
    async fn initialize(&self, config: &DecoderConfig) -> ScanResult<()> {
        debug!(
            symbologies = config.symbologies.len(),
            workers = config.workers,
            "no-op decoder initialized"
        );
        Ok(())
    }

    fn activate(&self) {
        debug!("no-op decoder activated");
    }

    fn deactivate(&self) {
        debug!("no-op decoder deactivated");
    }
}
