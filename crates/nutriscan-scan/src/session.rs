//! # Scan Session Controller
//!
//! The state machine governing camera lifecycle, decode-event debouncing,
//! lookup dispatch, and the two-phase result-reveal sequence.
//!
//! ## Session State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Session Phase Transitions                     │
//! │                                                                 │
//! │  ┌──────┐   start (init once, then activate)   ┌────────┐      │
//! │  │ Idle │ ────────────────────────────────────►│ Active │      │
//! │  └──────┘                                      └───┬────┘      │
//! │      ▲                                             │            │
//! │      │ init failure                         stop   │            │
//! │      │ (no retry)                                  ▼            │
//! │      │                                        ┌─────────┐      │
//! │      └──────────────── start ◄────────────────│ Stopped │      │
//! │              (reuses initialized decoder)     └─────────┘      │
//! │                                                                 │
//! │  DISPLAY PHASES (within Active)                                 │
//! │  ──────────────────────────────                                 │
//! │  Hidden ── lookup hit, content populated ──► Pending            │
//! │  Pending ── reveal delay elapsed ──► Shown                      │
//! │  Hidden ── lookup miss ──► Shown (no reveal delay)              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timer Gating
//!
//! Timers are fire-and-forget: there is no cancellation. Every scheduled
//! event carries the generation it was scheduled under, and the generation
//! is bumped on every *start*. A timer event is applied only if its
//! generation is current and the phase gate passes, so timers surviving a
//! stopped session can never corrupt a later session's display.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, info, warn};

use nutriscan_core::{Catalog, LookupResult};

use crate::config::ScanConfig;
use crate::decoder::BarcodeDecoder;
use crate::display::{self, ResultDisplay};
use crate::error::{ScanError, ScanResult};

// =============================================================================
// Session State
// =============================================================================

/// Camera lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session has run, or the last start attempt failed.
    Idle,
    /// Camera active, detections accepted.
    Active,
    /// Session stopped; the decoder stays initialized for the next start.
    Stopped,
}

/// Two-stage reveal state of the result overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPhase {
    /// Overlay off screen.
    Hidden,
    /// Content populated, not yet visible.
    Pending,
    /// Overlay visible.
    Shown,
}

/// Snapshot of the session state for external queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    /// Camera lifecycle phase.
    pub phase: SessionPhase,

    /// True once the decoder's one-time initialization has completed.
    /// Persists across sessions within the same process.
    pub decoder_ready: bool,

    /// True for the cooldown window after each accepted detection.
    pub cooldown_active: bool,

    /// Reveal state of the result overlay.
    pub display_phase: DisplayPhase,
}

/// Mutable session state, owned exclusively by the event loop.
#[derive(Debug)]
struct SessionState {
    phase: SessionPhase,
    decoder_ready: bool,
    cooldown_active: bool,
    display_phase: DisplayPhase,

    /// Bumped on every start; stale timer events are dropped by comparing
    /// against this.
    generation: u64,
}

impl SessionState {
    fn new() -> Self {
        SessionState {
            phase: SessionPhase::Idle,
            decoder_ready: false,
            cooldown_active: false,
            display_phase: DisplayPhase::Hidden,
            generation: 0,
        }
    }

    fn snapshot(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            decoder_ready: self.decoder_ready,
            cooldown_active: self.cooldown_active,
            display_phase: self.display_phase,
        }
    }
}

// =============================================================================
// Session Events
// =============================================================================

/// Events processed by the session event loop, in arrival order.
enum SessionEvent {
    /// *start* command from the handle.
    Start {
        reply: oneshot::Sender<ScanResult<()>>,
    },

    /// *stop* command from the handle.
    Stop { reply: oneshot::Sender<()> },

    /// Cooldown window elapsed for an accepted detection.
    CooldownElapsed { generation: u64 },

    /// Hide delay elapsed; time to perform the lookup.
    HideElapsed { generation: u64, code: String },

    /// Reveal delay elapsed; time to show the populated overlay.
    RevealElapsed { generation: u64 },

    /// Terminate the event loop.
    Shutdown,
}

// =============================================================================
// Session Handle
// =============================================================================

/// Handle for controlling a running scan session from outside.
#[derive(Clone)]
pub struct ScanSessionHandle {
    events_tx: mpsc::Sender<SessionEvent>,
    status: Arc<RwLock<SessionStatus>>,
}

impl ScanSessionHandle {
    /// Starts a scan session.
    ///
    /// Transitions `Idle`/`Stopped` to `Active`: clears debounce state,
    /// hides the overlay, initializes the decoder if it has never been
    /// initialized, and activates it. Returns
    /// [`ScanError::DecoderInit`] if initialization fails; the session
    /// stays `Idle` and there is no automatic retry.
    ///
    /// Starting an already-active session is a no-op.
    pub async fn start(&self) -> ScanResult<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.events_tx
            .send(SessionEvent::Start { reply: reply_tx })
            .await
            .map_err(|_| ScanError::ChannelClosed)?;
        reply_rx.await.map_err(|_| ScanError::ChannelClosed)?
    }

    /// Stops the scan session and deactivates the decoder.
    ///
    /// Pending timers are not canceled; phase and generation gating turn
    /// them into no-ops.
    pub async fn stop(&self) -> ScanResult<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.events_tx
            .send(SessionEvent::Stop { reply: reply_tx })
            .await
            .map_err(|_| ScanError::ChannelClosed)?;
        reply_rx.await.map_err(|_| ScanError::ChannelClosed)
    }

    /// Returns a snapshot of the current session state.
    pub async fn status(&self) -> SessionStatus {
        *self.status.read().await
    }

    /// Terminates the session event loop.
    pub async fn shutdown(&self) {
        let _ = self.events_tx.send(SessionEvent::Shutdown).await;
    }
}

// =============================================================================
// Scan Session
// =============================================================================

/// The scan-session controller.
///
/// Owns all mutable session state inside a single event-loop task; the
/// decoder and UI surface are injected collaborators behind trait seams.
///
/// ## Usage
/// ```rust,ignore
/// let (handle, detections) = ScanSession::spawn(
///     ScanConfig::default(),
///     catalog,
///     Arc::new(CameraDecoder::new()),
///     Arc::new(OverlayDisplay::new()),
/// )?;
///
/// // Wire the decoder's detection callback to the channel.
/// handle.start().await?;
/// detections.send("8901014004133".to_string()).await?;
/// ```
pub struct ScanSession {
    config: ScanConfig,
    catalog: Arc<Catalog>,
    decoder: Arc<dyn BarcodeDecoder>,
    display: Arc<dyn ResultDisplay>,
    state: SessionState,
    status: Arc<RwLock<SessionStatus>>,
    /// Weak so the loop never keeps its own channel open: once every
    /// handle (and pending timer) is gone, `events_rx` closes and the
    /// loop terminates instead of leaking for the process lifetime.
    events_tx: mpsc::WeakSender<SessionEvent>,
    events_rx: mpsc::Receiver<SessionEvent>,
    detections_rx: mpsc::Receiver<String>,
}

impl ScanSession {
    /// Creates a session and spawns its event loop.
    ///
    /// Returns a control handle and the sender the decoder implementation
    /// should push decoded barcode strings into. Detections are processed
    /// strictly in arrival order.
    pub fn spawn(
        config: ScanConfig,
        catalog: Arc<Catalog>,
        decoder: Arc<dyn BarcodeDecoder>,
        display: Arc<dyn ResultDisplay>,
    ) -> ScanResult<(ScanSessionHandle, mpsc::Sender<String>)> {
        config.validate()?;

        let (events_tx, events_rx) = mpsc::channel::<SessionEvent>(32);
        let (detections_tx, detections_rx) = mpsc::channel::<String>(64);

        let state = SessionState::new();
        let status = Arc::new(RwLock::new(state.snapshot()));

        let session = ScanSession {
            config,
            catalog,
            decoder,
            display,
            state,
            status: status.clone(),
            events_tx: events_tx.downgrade(),
            events_rx,
            detections_rx,
        };

        let handle = ScanSessionHandle { events_tx, status };

        tokio::spawn(session.run());

        Ok((handle, detections_tx))
    }

    /// Main event loop. All state mutation happens here.
    async fn run(mut self) {
        loop {
            tokio::select! {
                event = self.events_rx.recv() => match event {
                    Some(event) => {
                        if self.handle_event(event).await {
                            break;
                        }
                    }
                    // Every handle and pending timer is gone; nothing can
                    // command this session again.
                    None => break,
                },

                Some(code) = self.detections_rx.recv() => {
                    self.on_detected(code);
                    self.publish_status().await;
                }

                else => break,
            }
        }

        debug!("session event loop stopped");
    }

    /// Dispatches one event. Returns true when the loop should terminate.
    ///
    /// Command replies are sent only after the status snapshot is
    /// published, so a caller awaking from `start()`/`stop()` always
    /// reads a post-command `status()`.
    async fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Start { reply } => {
                let result = self.handle_start().await;
                self.publish_status().await;
                let _ = reply.send(result);
            }
            SessionEvent::Stop { reply } => {
                self.handle_stop();
                self.publish_status().await;
                let _ = reply.send(());
            }
            SessionEvent::CooldownElapsed { generation } => {
                self.on_cooldown_elapsed(generation);
                self.publish_status().await;
            }
            SessionEvent::HideElapsed { generation, code } => {
                self.on_hide_elapsed(generation, code);
                self.publish_status().await;
            }
            SessionEvent::RevealElapsed { generation } => {
                self.on_reveal_elapsed(generation);
                self.publish_status().await;
            }
            SessionEvent::Shutdown => return true,
        }
        false
    }

    async fn handle_start(&mut self) -> ScanResult<()> {
        if self.state.phase == SessionPhase::Active {
            debug!("start ignored: session already active");
            return Ok(());
        }

        // Invalidate any timers still pending from a previous session.
        self.state.generation = self.state.generation.wrapping_add(1);
        self.state.cooldown_active = false;
        self.state.display_phase = DisplayPhase::Hidden;
        self.display.hide_overlay();

        // One-time initialization; decoder_ready persists across sessions.
        if !self.state.decoder_ready {
            match self.decoder.initialize(&self.config.decoder).await {
                Ok(()) => {
                    self.state.decoder_ready = true;
                    debug!("decoder initialized");
                }
                Err(err) => {
                    warn!(%err, "decoder initialization failed");
                    self.display.show_error(&err.to_string());
                    self.state.phase = SessionPhase::Idle;
                    return Err(err);
                }
            }
        }

        self.decoder.activate();
        self.state.phase = SessionPhase::Active;
        info!("scan session started");
        Ok(())
    }

    fn handle_stop(&mut self) {
        if self.state.phase != SessionPhase::Active {
            debug!("stop ignored: session not active");
            return;
        }

        self.decoder.deactivate();
        self.state.phase = SessionPhase::Stopped;
        info!("scan session stopped");
    }

    /// Handles one detection delivered by the decoder.
    fn on_detected(&mut self, code: String) {
        if self.state.phase != SessionPhase::Active {
            debug!(%code, "detection dropped: session not active");
            return;
        }
        if self.state.cooldown_active {
            // Pure time debounce: code identity never participates, so a
            // repeat of the same code and a different code are dropped alike.
            debug!(%code, "detection dropped: cooldown active");
            return;
        }

        info!(%code, "barcode detected");

        self.state.cooldown_active = true;
        let generation = self.state.generation;
        self.schedule(
            self.config.cooldown,
            SessionEvent::CooldownElapsed { generation },
        );

        // Retract any currently shown result before the new content lands.
        self.state.display_phase = DisplayPhase::Hidden;
        self.display.hide_overlay();
        self.schedule(
            self.config.hide_delay,
            SessionEvent::HideElapsed { generation, code },
        );
    }

    fn on_cooldown_elapsed(&mut self, generation: u64) {
        if generation != self.state.generation {
            debug!("stale cooldown timer ignored");
            return;
        }
        self.state.cooldown_active = false;
        debug!("cooldown elapsed");
    }

    /// Hide delay elapsed: perform the lookup and populate the overlay.
    fn on_hide_elapsed(&mut self, generation: u64, code: String) {
        if generation != self.state.generation || self.state.phase != SessionPhase::Active {
            debug!(%code, "stale hide timer ignored");
            return;
        }

        match self.catalog.describe(&code) {
            LookupResult::Found(annotation) => {
                self.display
                    .set_product_name(&display::format_product_name(&annotation.name));
                self.display.set_barcode(&display::format_barcode(&code));
                self.display
                    .set_nutrients(&display::format_nutrients(&annotation));
                self.state.display_phase = DisplayPhase::Pending;
                self.schedule(
                    self.config.reveal_delay,
                    SessionEvent::RevealElapsed { generation },
                );
            }
            LookupResult::NotFound { code } => {
                // No detailed content to prepare, so no reveal delay.
                self.display.clear_product_name();
                self.display.set_barcode(&display::format_barcode(&code));
                self.display.set_nutrients(&display::format_not_found(&code));
                self.state.display_phase = DisplayPhase::Shown;
                self.display.show_overlay();
            }
        }
    }

    /// Reveal delay elapsed: show the already-populated overlay.
    fn on_reveal_elapsed(&mut self, generation: u64) {
        if generation != self.state.generation
            || self.state.phase != SessionPhase::Active
            || self.state.display_phase != DisplayPhase::Pending
        {
            debug!("stale reveal timer ignored");
            return;
        }

        self.state.display_phase = DisplayPhase::Shown;
        self.display.show_overlay();
    }

    /// Schedules a fire-and-forget timer event on the session's own channel.
    fn schedule(&self, delay: Duration, event: SessionEvent) {
        // The strong sender lives only as long as the timer task.
        let Some(tx) = self.events_tx.upgrade() else {
            return;
        };
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The loop may already be gone during shutdown.
            let _ = tx.send(event).await;
        });
    }

    async fn publish_status(&self) {
        *self.status.write().await = self.state.snapshot();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
