//! Exchange form state machine.
//!
//! `ExchangeForm` holds everything the swap widget renders: both amount
//! fields, per-field errors, which field has focus, and whether a swap is
//! being edited, confirmed or done. The UI calls the handlers below from its
//! input events; every transition is synchronous. The only deferred step is
//! settlement, which the caller signals with [`ExchangeForm::complete_confirm`]
//! once the simulated delay has elapsed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::fmt;

use crate::asset::AssetKind;
use crate::config::SwapConfig;
use crate::convert::{convert, parse_amount, rate_label};
use crate::estimate::estimate_minutes;
use crate::validate::{check_balance, check_format, strip_grouping, AmountError};

/// Amount shown in the send field when the form opens.
pub const DEFAULT_SEND_AMOUNT: &str = "1.00";

/// Consecutive identical rejections that make a field shake.
pub const SHAKE_THRESHOLD: u8 = 3;

/// Which amount field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    None,
    Send,
    /// The receive field shows its live input instead of the formatted text.
    Receive,
}

/// Top-level form phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// Confirm pressed, simulated settlement pending.
    Confirming,
    /// Settlement finished; the receipt is on display.
    Confirmed,
}

/// Result of feeding raw input to one of the amount fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The amount was taken and the paired field recomputed.
    Accepted,
    /// Malformed input; nothing changed except the field's error.
    Rejected(AmountError),
    /// The form is not in the editing phase.
    Ignored,
}

/// One side of the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub amount: String,
    pub asset: AssetKind,
    pub error: Option<AmountError>,
    repeats: u8,
}

impl FieldState {
    fn new(amount: String, asset: AssetKind) -> Self {
        Self {
            amount,
            asset,
            error: None,
            repeats: 0,
        }
    }

    /// Whether the field's shake animation should play.
    pub fn shake(&self) -> bool {
        self.repeats >= SHAKE_THRESHOLD
    }

    pub fn has_format_error(&self) -> bool {
        self.error.as_ref().is_some_and(AmountError::is_blocking)
    }

    /// Record a rejection, counting it if it repeats the current error.
    fn reject(&mut self, err: AmountError) {
        if self.error.as_ref() == Some(&err) {
            self.repeats = self.repeats.saturating_add(1);
        } else {
            self.repeats = 1;
        }
        self.error = Some(err);
    }

    /// Replace the error after a successful edit and reset the repeat count.
    fn settle(&mut self, err: Option<AmountError>) {
        self.error = err;
        self.repeats = 0;
    }
}

/// Snapshot of a confirmed swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub send_amount: String,
    pub send_symbol: String,
    pub receive_amount: String,
    pub receive_symbol: String,
    pub estimated_minutes: u32,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} → {} {} (~{} min)",
            self.send_amount,
            self.send_symbol,
            self.receive_amount,
            self.receive_symbol,
            self.estimated_minutes
        )
    }
}

/// The swap form.
#[derive(Debug)]
pub struct ExchangeForm<R = StdRng> {
    config: SwapConfig,
    rng: R,
    send: FieldState,
    receive: FieldState,
    focus: Focus,
    phase: Phase,
    estimated_minutes: u32,
    receipt: Option<Receipt>,
}

impl ExchangeForm<StdRng> {
    /// Create a form with default amounts and an entropy-seeded estimate.
    pub fn new(config: SwapConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> ExchangeForm<R> {
    /// Create a form drawing the estimate jitter from `rng`.
    pub fn with_rng(config: SwapConfig, rng: R) -> Self {
        let mut form = Self {
            config,
            rng,
            send: FieldState::new(String::new(), AssetKind::Coin),
            receive: FieldState::new(String::new(), AssetKind::Token),
            focus: Focus::None,
            phase: Phase::Editing,
            estimated_minutes: 0,
            receipt: None,
        };
        form.reset();
        form
    }

    /// Return to the editing phase with default amounts and assets.
    pub fn reset(&mut self) {
        let send = FieldState::new(DEFAULT_SEND_AMOUNT.to_string(), AssetKind::Coin);
        let receive_amount = convert(&self.config, &send.amount, send.asset, AssetKind::Token);
        self.send = send;
        self.receive = FieldState::new(receive_amount, AssetKind::Token);
        self.focus = Focus::None;
        self.phase = Phase::Editing;
        self.receipt = None;
        self.revalidate_send();
        self.refresh_estimate();
        log::debug!("Form reset to {} {}", DEFAULT_SEND_AMOUNT, self.config.coin.symbol);
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    pub fn send(&self) -> &FieldState {
        &self.send
    }

    pub fn receive(&self) -> &FieldState {
        &self.receive
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_minutes
    }

    /// The swap captured by the last confirm, until the next reset.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Rate line for the current direction.
    pub fn rate_label(&self) -> String {
        rate_label(&self.config, self.send.asset, self.receive.asset)
    }

    /// Handle a change of the send field.
    pub fn edit_send(&mut self, raw: &str) -> EditOutcome {
        if self.phase != Phase::Editing {
            return EditOutcome::Ignored;
        }

        let cleaned = strip_grouping(raw);
        if let Err(err) = check_format(&cleaned) {
            log::debug!("Rejected send input {:?}", raw);
            self.send.reject(err.clone());
            return EditOutcome::Rejected(err);
        }

        self.receive.amount = convert(&self.config, &cleaned, self.send.asset, self.receive.asset);
        self.send.amount = cleaned;
        self.receive.settle(None);
        self.revalidate_send();
        self.refresh_estimate();
        EditOutcome::Accepted
    }

    /// Handle a change of the receive field; the send side is derived
    /// backward through the inverted pair.
    pub fn edit_receive(&mut self, raw: &str) -> EditOutcome {
        if self.phase != Phase::Editing {
            return EditOutcome::Ignored;
        }

        let cleaned = strip_grouping(raw);
        if let Err(err) = check_format(&cleaned) {
            log::debug!("Rejected receive input {:?}", raw);
            self.receive.reject(err.clone());
            return EditOutcome::Rejected(err);
        }

        self.send.amount = convert(&self.config, &cleaned, self.receive.asset, self.send.asset);
        self.receive.amount = cleaned;
        self.receive.settle(None);
        self.revalidate_send();
        self.refresh_estimate();
        EditOutcome::Accepted
    }

    /// Fill the send field with the whole balance of the send asset.
    pub fn fill_max(&mut self) -> EditOutcome {
        let asset = self.config.asset(self.send.asset);
        let max = asset.format_amount(asset.balance);
        self.edit_send(&max)
    }

    /// Exchange the two sides. Returns `false` when blocked by a format
    /// error on either field or when not editing.
    pub fn swap(&mut self) -> bool {
        if self.phase != Phase::Editing {
            return false;
        }
        if self.send.has_format_error() || self.receive.has_format_error() {
            log::debug!("Swap blocked by a pending format error");
            return false;
        }

        std::mem::swap(&mut self.send, &mut self.receive);
        self.receive.settle(None);
        self.revalidate_send();
        self.refresh_estimate();
        log::debug!(
            "Swapped direction: {} → {}",
            self.config.asset(self.send.asset).symbol,
            self.config.asset(self.receive.asset).symbol
        );
        true
    }

    /// Whether the confirm control should be enabled.
    pub fn can_confirm(&self) -> bool {
        self.phase == Phase::Editing
            && self.send.error.is_none()
            && self.receive.error.is_none()
            && parse_amount(&self.send.amount).is_some_and(|v| v > Decimal::ZERO)
            && !self.receive.amount.is_empty()
    }

    /// Capture the receipt and enter the confirming phase.
    ///
    /// Returns the receipt to settle, or `None` if confirmation is not
    /// currently allowed.
    pub fn begin_confirm(&mut self) -> Option<Receipt> {
        if !self.can_confirm() {
            return None;
        }

        let receipt = Receipt {
            send_amount: self.send.amount.clone(),
            send_symbol: self.config.asset(self.send.asset).symbol.clone(),
            receive_amount: self.receive.amount.clone(),
            receive_symbol: self.config.asset(self.receive.asset).symbol.clone(),
            estimated_minutes: self.estimated_minutes,
        };
        log::info!("Confirming swap: {}", receipt);

        self.phase = Phase::Confirming;
        self.focus = Focus::None;
        self.receipt = Some(receipt.clone());
        Some(receipt)
    }

    /// Finish a pending confirmation. Ignored in any other phase.
    pub fn complete_confirm(&mut self) -> bool {
        if self.phase != Phase::Confirming {
            return false;
        }
        self.phase = Phase::Confirmed;
        true
    }

    /// Drop a pending confirmation and return to editing with the amounts
    /// untouched. Ignored in any other phase.
    pub fn cancel_confirm(&mut self) -> bool {
        if self.phase != Phase::Confirming {
            return false;
        }
        log::warn!("Confirmation abandoned, back to editing");
        self.phase = Phase::Editing;
        self.receipt = None;
        true
    }

    fn revalidate_send(&mut self) {
        let asset = self.config.asset(self.send.asset);
        let advisory = check_balance(&self.send.amount, asset).err();
        self.send.settle(advisory);
    }

    fn refresh_estimate(&mut self) {
        let usd_of = |field: &FieldState| {
            parse_amount(&field.amount)
                .map(|v| self.config.usd_value(field.asset, v))
                .unwrap_or(Decimal::ZERO)
        };
        let usd = usd_of(&self.send).max(usd_of(&self.receive));
        self.estimated_minutes = estimate_minutes(&self.config.estimate, usd, &mut self.rng);
    }
}
