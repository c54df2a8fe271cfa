//! Application state — plain data, no async, no Arc.
//!
//! `AppState` holds everything the UI needs to render: the exchange form plus
//! the text buffers egui edits in place. The service task sends
//! `ServiceEvent`s which are applied via `AppState::apply()`.

use chrono::{DateTime, Local};
use mockswap_core::{ExchangeForm, SwapConfig};
use tokio::sync::mpsc;

use crate::events::{ServiceEvent, UiEvent};

/// All application state needed for rendering.
#[derive(Debug)]
pub struct AppState {
    pub form: ExchangeForm,

    // -- Text buffers bound to the amount inputs --
    /// Refreshed from the form every frame, so a rejected edit snaps back.
    pub send_input: String,
    pub receive_input: String,

    // -- UI transient state --
    /// Move keyboard focus into the receive input on the next frame.
    pub focus_receive_input: bool,
    pub settled_at: Option<DateTime<Local>>,
    pub error: Option<String>,
}

impl AppState {
    pub fn new(config: SwapConfig) -> Self {
        let mut state = Self {
            form: ExchangeForm::new(config),
            send_input: String::new(),
            receive_input: String::new(),
            focus_receive_input: false,
            settled_at: None,
            error: None,
        };
        state.sync_inputs();
        state
    }

    /// Copy the form's amounts into the edit buffers.
    pub fn sync_inputs(&mut self) {
        self.send_input.clone_from(&self.form.send().amount);
        self.receive_input.clone_from(&self.form.receive().amount);
    }

    /// Leave the success panel and start over with default amounts.
    pub fn start_new_swap(&mut self) {
        self.form.reset();
        self.settled_at = None;
        self.error = None;
        self.focus_receive_input = false;
        self.sync_inputs();
    }

    /// Start confirming the current amounts and hand the receipt to the
    /// service task. If the service is gone the form goes back to editing.
    pub fn submit_confirm(&mut self, ui_tx: &mpsc::UnboundedSender<UiEvent>) {
        let Some(receipt) = self.form.begin_confirm() else {
            return;
        };
        match ui_tx.send(UiEvent::ConfirmSwap(receipt)) {
            Ok(()) => self.error = None,
            Err(e) => {
                log::error!("❌ Failed to reach swap service: {}", e);
                self.form.cancel_confirm();
                self.error = Some("Swap service is not running".to_string());
                self.sync_inputs();
            }
        }
    }

    /// Apply a service event to update state. Pure state-machine transition.
    pub fn apply(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::SwapSettled {
                receipt,
                settled_at,
            } => {
                if self.form.complete_confirm() {
                    self.settled_at = Some(settled_at);
                    self.error = None;
                } else {
                    log::warn!("Settlement of {} arrived with nothing pending", receipt);
                }
            }

            ServiceEvent::Error(msg) => {
                self.error = Some(msg);
            }
        }
    }
}
