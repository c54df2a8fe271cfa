//! MockSwap core
//!
//! Everything behind the swap form that does not need a display:
//! - fixed two-asset table and rate, loaded once as [`SwapConfig`]
//! - decimal amount conversion and display formatting
//! - format and balance validation with inline error messages
//! - the cosmetic transaction-time estimate
//! - [`ExchangeForm`], the state machine driven by the UI's input handlers

pub mod asset;
pub mod config;
pub mod convert;
pub mod estimate;
pub mod form;
pub mod validate;

pub use asset::{Asset, AssetKind};
pub use config::{ConfigError, EstimateConfig, SwapConfig};
pub use convert::{convert, group_thousands, parse_amount, rate_label};
pub use estimate::{estimate_minutes, format_minutes};
pub use form::{EditOutcome, ExchangeForm, FieldState, Focus, Phase, Receipt};
pub use validate::{check_balance, check_format, strip_grouping, AmountError};
