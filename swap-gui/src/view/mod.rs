//! UI view modules — pure rendering functions.
//!
//! Each submodule renders one screen. Views read from [`AppState`] and send
//! [`UiEvent`]s on user interaction. No async, no timers.
//!
//! [`AppState`]: crate::state::AppState
//! [`UiEvent`]: crate::events::UiEvent

pub mod success;
pub mod swap;
