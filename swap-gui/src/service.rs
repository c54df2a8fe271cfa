//! Background service task — single `select!` loop, no spawns.
//!
//! The service owns the one piece of deferred work in the app: the simulated
//! settlement delay after the user confirms a swap. It receives [`UiEvent`]s
//! from the UI thread and answers with [`ServiceEvent`]s. Nothing leaves the
//! process.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::events::{ServiceEvent, UiEvent};
use mockswap_core::Receipt;

/// Run the service loop until the cancellation token fires or the UI side
/// of the channel goes away.
pub async fn run(
    token: CancellationToken,
    mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    svc_tx: mpsc::UnboundedSender<ServiceEvent>,
    confirm_delay: Duration,
) {
    let mut pending: Option<Receipt> = None;
    let settle = tokio::time::sleep(confirm_delay);
    tokio::pin!(settle);

    log::info!("🚀 Service loop started (confirm delay {:?})", confirm_delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                log::info!("🛑 Service loop shutting down");
                break;
            }

            // Simulated settlement finished
            _ = &mut settle, if pending.is_some() => {
                if let Some(receipt) = pending.take() {
                    log::info!("✅ Swap settled: {}", receipt);
                    let _ = svc_tx.send(ServiceEvent::SwapSettled {
                        receipt,
                        settled_at: chrono::Local::now(),
                    });
                }
            }

            event = ui_rx.recv() => {
                match event {
                    Some(UiEvent::ConfirmSwap(receipt)) => {
                        if let Some(ref current) = pending {
                            log::warn!("Ignoring confirm of {} while {} is pending", receipt, current);
                            let _ = svc_tx.send(ServiceEvent::Error(
                                "A swap is already being confirmed".to_string(),
                            ));
                        } else {
                            log::debug!("Settling {} in {:?}", receipt, confirm_delay);
                            settle.as_mut().reset(Instant::now() + confirm_delay);
                            pending = Some(receipt);
                        }
                    }

                    Some(UiEvent::Shutdown) | None => {
                        log::info!("🛑 Service loop shutting down");
                        break;
                    }
                }
            }
        }
    }
}
