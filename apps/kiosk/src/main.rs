//! # NutriScan Kiosk
//!
//! Headless demo shell for the scan-session controller.
//!
//! In a deployed build the decoder seam is backed by a real camera
//! decoder and the display seam by the result overlay. This shell stands
//! both in: a no-op decoder, a terminal display, and a scripted detection
//! sequence exercising the hit, debounce-drop, and miss paths.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use nutriscan_core::Catalog;
use nutriscan_scan::{NoOpDecoder, ResultDisplay, ScanConfig, ScanSession};

/// Result display that writes UI mutations to the terminal.
struct TerminalDisplay;

impl ResultDisplay for TerminalDisplay {
    fn set_product_name(&self, text: &str) {
        println!("[display] {}", text);
    }

    fn clear_product_name(&self) {
        println!("[display] (name cleared)");
    }

    fn set_barcode(&self, text: &str) {
        println!("[display] {}", text);
    }

    fn set_nutrients(&self, text: &str) {
        println!("[display] {}", text);
    }

    fn show_overlay(&self) {
        println!("[display] >>> overlay shown");
    }

    fn hide_overlay(&self) {
        println!("[display] <<< overlay hidden");
    }

    fn show_error(&self, message: &str) {
        eprintln!("[display] !!! {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The catalog ships with the binary; a larger one can be swapped in
    // without touching the controller.
    let catalog = Arc::new(Catalog::from_json_str(include_str!(
        "../data/catalog.json"
    ))?);
    info!(products = catalog.len(), "catalog loaded");

    let (session, detections) = ScanSession::spawn(
        ScanConfig::default(),
        catalog,
        Arc::new(NoOpDecoder),
        Arc::new(TerminalDisplay),
    )?;

    session.start().await?;

    // Scripted feed: a known product, a duplicate inside the cooldown
    // window (silently dropped), and an unknown code after the window.
    detections.send("8901014004133".to_string()).await?;
    tokio::time::sleep(Duration::from_millis(200)).await;
    detections.send("8901014004133".to_string()).await?;

    tokio::time::sleep(Duration::from_millis(3000)).await;
    detections.send("0000000000000".to_string()).await?;
    tokio::time::sleep(Duration::from_millis(800)).await;

    session.stop().await?;
    session.shutdown().await;
    info!("kiosk demo finished");

    Ok(())
}
