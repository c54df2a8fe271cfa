//! Application struct — the eframe::App implementation.
//!
//! Thin wrapper: drains service events, dispatches to view modules.
//! No async, no timers, no swap logic.

use std::time::Duration;

use mockswap_core::{Phase, SwapConfig};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::events::{ServiceEvent, UiEvent};
use crate::state::AppState;
use crate::view;

/// Repaint interval while a confirmation is pending, so the settlement
/// shows up without user input.
const PENDING_REPAINT: Duration = Duration::from_millis(200);

/// The swap application.
pub struct App {
    pub state: AppState,
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
    svc_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    shutdown_token: CancellationToken,
}

impl App {
    /// Create a new App, spawning the background service task.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SwapConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (svc_tx, svc_rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();

        // Spawn the single background service task
        let svc_token = token.clone();
        tokio::spawn(crate::service::run(
            svc_token,
            ui_rx,
            svc_tx,
            config.confirm_delay(),
        ));

        Self {
            state: AppState::new(config),
            ui_tx,
            svc_rx,
            shutdown_token: token,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.ui_tx.send(UiEvent::Shutdown);
        self.shutdown_token.cancel();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Drain all pending service events (non-blocking)
        while let Ok(event) = self.svc_rx.try_recv() {
            self.state.apply(event);
            ctx.request_repaint();
        }

        if self.state.form.phase() == Phase::Confirming {
            ctx.request_repaint_after(PENDING_REPAINT);
        }

        // 2. Central panel — route on the form phase
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_max_width(480.0);
            match self.state.form.phase() {
                Phase::Editing | Phase::Confirming => {
                    view::swap::show(ui, &mut self.state, &self.ui_tx);
                }
                Phase::Confirmed => {
                    view::success::show(ui, &mut self.state);
                }
            }
        });
    }
}
