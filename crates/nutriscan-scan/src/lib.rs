//! # nutriscan-scan: Scan-Session Controller
//!
//! The state machine governing camera lifecycle, decode-event debouncing,
//! lookup dispatch, and result-display sequencing.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Scan Session Flow                          │
//! │                                                                 │
//! │  start ──► activate decoder ──► detections arrive (async)      │
//! │                                       │                         │
//! │                                       ▼                         │
//! │                            cooldown guard (3s debounce)         │
//! │                                       │                         │
//! │                                       ▼                         │
//! │                            hide overlay ── 500ms ──► lookup     │
//! │                                       │                         │
//! │                          ┌────────────┴────────────┐            │
//! │                          ▼                         ▼            │
//! │                       Found                    NotFound         │
//! │                  populate content          not-found message    │
//! │                  ── 100ms ──► reveal       reveal immediately   │
//! │                                                                 │
//! │  stop ──► deactivate decoder; stale timers become no-ops        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The session controller: event loop, state machine, timers
//! - [`decoder`] - Seam for the external barcode decoder collaborator
//! - [`display`] - Seam for the write-only UI sink, plus overlay text formatting
//! - [`config`] - Session timing and decoder pass-through configuration
//! - [`error`] - Session error types
//!
//! ## Concurrency Model
//!
//! All session state is owned by a single event-loop task. Concurrency is
//! expressed as deferred timer events and externally delivered detections,
//! never as parallel mutation. There is no timer cancellation: every
//! timer-scheduled action re-checks phase and generation guards before
//! touching state, so timers from a stopped session cannot corrupt a new
//! session's display.

pub mod config;
pub mod decoder;
pub mod display;
pub mod error;
pub mod session;

pub use config::{DecoderConfig, FacingMode, ScanConfig, Symbology, VideoConstraints};
pub use decoder::{BarcodeDecoder, NoOpDecoder};
pub use display::{NoOpDisplay, ResultDisplay};
pub use error::{ScanError, ScanResult};
pub use session::{DisplayPhase, ScanSession, ScanSessionHandle, SessionPhase, SessionStatus};
