//! # nutriscan-core: Pure Domain Logic for NutriScan
//!
//! This crate is the leaf of the NutriScan workspace. It holds the product
//! annotation model and the Lookup Service as pure, synchronous code with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    NutriScan Architecture                       │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                  apps/kiosk (shell)                       │ │
//! │  │     loads catalog JSON ──► wires decoder + display        │ │
//! │  └───────────────────────────┬───────────────────────────────┘ │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐ │
//! │  │              nutriscan-scan (controller)                  │ │
//! │  │     session state machine, debounce, reveal timers        │ │
//! │  └───────────────────────────┬───────────────────────────────┘ │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐ │
//! │  │             ★ nutriscan-core (THIS CRATE) ★               │ │
//! │  │                                                           │ │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐            │ │
//! │  │   │   types   │  │  catalog  │  │   error   │            │ │
//! │  │   │ Annotation│  │  Catalog  │  │ CoreError │            │ │
//! │  │   │LookupResult│ │ describe()│  │           │            │ │
//! │  │   └───────────┘  └───────────┘  └───────────┘            │ │
//! │  │                                                           │ │
//! │  │   NO I/O • NO CAMERA • NO NETWORK • PURE FUNCTIONS        │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Annotation, LookupResult)
//! - [`catalog`] - The Lookup Service: barcode → annotation mapping
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: lookups are deterministic - same input = same output
//! 2. **No I/O**: catalog data is injected by the caller, never loaded here
//! 3. **Absence Is Not Failure**: a missing barcode is a normal lookup result
//! 4. **Explicit Errors**: construction errors are typed, never strings

pub mod catalog;
pub mod error;
pub mod types;

// Re-exports for convenience: `use nutriscan_core::Catalog` instead of
// `use nutriscan_core::catalog::Catalog`.
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use types::{Annotation, LookupResult};
