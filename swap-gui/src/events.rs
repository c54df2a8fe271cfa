//! Event types for communication between UI and service task.
//!
//! These two enums are the *only* interface between the synchronous egui render
//! loop and the asynchronous service task. No shared state, no Arc, no Mutex.

use chrono::{DateTime, Local};
use mockswap_core::Receipt;

// ============================================================================
// UI → Service
// ============================================================================

/// Commands sent from the UI thread to the background service task.
#[derive(Debug)]
pub enum UiEvent {
    /// Start the simulated settlement of a confirmed swap.
    ConfirmSwap(Receipt),

    /// Clean shutdown.
    Shutdown,
}

// ============================================================================
// Service → UI
// ============================================================================

/// Events sent from the service task back to the UI thread.
#[derive(Debug)]
pub enum ServiceEvent {
    /// The simulated settlement delay elapsed.
    SwapSettled {
        receipt: Receipt,
        settled_at: DateTime<Local>,
    },

    /// Non-fatal error to display in the UI.
    Error(String),
}
