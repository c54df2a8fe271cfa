//! End-to-end behaviour of the swap form, driven the way the GUI drives it.

use mockswap_core::{
    convert, parse_amount, AmountError, AssetKind, EditOutcome, ExchangeForm, Phase, SwapConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn new_form() -> ExchangeForm {
    ExchangeForm::with_rng(SwapConfig::default(), StdRng::seed_from_u64(2024))
}

#[test]
fn test_round_trip_within_precision() {
    let config = SwapConfig::default();
    let coin_unit = dec!(0.000001);
    let token_unit = dec!(0.01);
    // half a token unit carried back through the rate, plus half a coin unit
    let tolerance = token_unit / dec!(2) / config.rate + coin_unit / dec!(2);

    for input in ["0.000001", "0.5", "1", "1.25", "2.000001", "3.333333", "3.5"] {
        let original = parse_amount(input).unwrap();
        let received = convert(&config, input, AssetKind::Coin, AssetKind::Token);
        let back = convert(&config, &received, AssetKind::Token, AssetKind::Coin);
        let back = parse_amount(&back).unwrap();
        assert!(
            (back - original).abs() <= tolerance,
            "{} → {} → {}",
            input,
            received,
            back
        );
    }

    for input in ["1", "99.99", "1000", "4999.99"] {
        let original = parse_amount(input).unwrap();
        let sent = convert(&config, input, AssetKind::Token, AssetKind::Coin);
        let back = convert(&config, &sent, AssetKind::Coin, AssetKind::Token);
        let back = parse_amount(&back).unwrap();
        // a coin unit is worth about 0.002 USDC, so one token unit covers it
        assert!((back - original).abs() <= token_unit, "{} → {} → {}", input, sent, back);
    }
}

#[test]
fn test_form_round_trip_through_both_fields() {
    let mut form = new_form();
    form.edit_send("2.00");
    assert_eq!(form.receive().amount, "4368.66");

    let received = form.receive().amount.clone();
    form.edit_receive(&received);
    assert_eq!(parse_amount(&form.send().amount), Some(dec!(2)));
}

#[test]
fn test_garbage_never_touches_paired_field() {
    let mut form = new_form();
    form.edit_send("1.5");
    let receive_before = form.receive().amount.clone();

    for input in ["abc", "1.2.3", "12a", "$5", "1_000", "--1", "½"] {
        assert_eq!(
            form.edit_send(input),
            EditOutcome::Rejected(AmountError::NumbersOnly),
            "{:?}",
            input
        );
        assert_eq!(form.send().amount, "1.5");
        assert_eq!(form.receive().amount, receive_before);
    }

    let send_before = form.send().amount.clone();
    assert!(matches!(form.edit_receive("1e3"), EditOutcome::Rejected(_)));
    assert_eq!(form.send().amount, send_before);
}

#[test]
fn test_over_balance_shown_but_not_confirmable() {
    let mut form = new_form();
    assert_eq!(form.edit_send("4"), EditOutcome::Accepted);
    assert_eq!(form.receive().amount, "8737.32");
    assert_eq!(
        form.send().error.as_ref().map(ToString::to_string),
        Some("Insufficient ETH balance".to_string())
    );
    assert!(!form.can_confirm());

    assert_eq!(form.edit_send("3.4"), EditOutcome::Accepted);
    assert!(form.send().error.is_none());
    assert!(form.can_confirm());
}

#[test]
fn test_typing_sequence() {
    let mut form = new_form();
    for (typed, receive) in [
        ("", ""),
        ("0", "0.00"),
        ("0.", "0.00"),
        ("0.2", "436.87"),
        ("0.25", "546.08"),
    ] {
        assert_eq!(form.edit_send(typed), EditOutcome::Accepted);
        assert_eq!(form.receive().amount, receive, "after typing {:?}", typed);
    }
    assert!(form.send().error.is_none());
    assert!(form.can_confirm());
}

#[test]
fn test_full_swap_cycle() {
    let mut form = new_form();
    assert!(form.swap());
    assert_eq!(form.send().asset, AssetKind::Token);
    assert_eq!(form.edit_send("1000"), EditOutcome::Accepted);
    assert_eq!(form.receive().amount, "0.457806");

    let receipt = form.begin_confirm().unwrap();
    assert_eq!(receipt.send_symbol, "USDC");
    assert_eq!(receipt.receive_amount, "0.457806");
    assert_eq!(form.phase(), Phase::Confirming);

    assert!(form.complete_confirm());
    assert_eq!(form.phase(), Phase::Confirmed);

    form.reset();
    assert_eq!(form.send().asset, AssetKind::Coin);
    assert_eq!(form.receive().amount, "2184.33");
    assert!(form.estimated_minutes() >= 5 && form.estimated_minutes() <= 30);
}

#[test]
fn test_custom_config_precision() {
    let mut config = SwapConfig::default();
    config.coin.precision = 4;
    config.rate = dec!(100);
    let mut form = ExchangeForm::with_rng(config, StdRng::seed_from_u64(5));

    assert_eq!(form.receive().amount, "100.00");
    form.edit_receive("333");
    assert_eq!(form.send().amount, "3.3300");
    assert_eq!(parse_amount(&form.send().amount), Some(dec!(3.33)));
    assert!(parse_amount(&form.send().amount).unwrap() > Decimal::ZERO);
}
