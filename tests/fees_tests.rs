// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use feewise::compute_fees;
use feewise::error::PricingError;
use feewise::models::{BookingKind, Currency, RateOverrides, Region};
use rust_decimal_macros::dec;

fn quote(price: i64, kind: BookingKind, superhost: bool) -> feewise::models::FeeBreakdown {
    compute_fees(
        price,
        Currency::Eur,
        Region::France,
        kind,
        superhost,
        &RateOverrides::default(),
    )
    .unwrap()
}

#[test]
fn hundred_eur_stay_in_france() {
    let b = quote(10000, BookingKind::Stay, false);
    assert!(b.host_fee_cents > 0);
    assert!(b.guest_fee_cents > 0);
    assert!(b.charge_cents > 10000);
    assert!(b.host_payout_cents < 10000);
    // 100 EUR sits in the <150 band: host 11%, guest 9%, VAT 20% on the guest fee
    assert_eq!(b.host_fee_cents, 1100);
    assert_eq!(b.guest_fee_cents, 900);
    assert_eq!(b.tax_on_guest_fee_cents, 180);
    assert_eq!(b.charge_cents, 11080);
    assert_eq!(b.host_payout_cents, 8900);
    assert_eq!(b.platform_gross_cents, 1100 + 900 + 180);
    assert_eq!(
        b.platform_net_cents,
        b.platform_gross_cents - b.stripe_estimate_cents
    );
}

#[test]
fn fees_clamped_to_currency_floor_for_tiny_price() {
    // 1 EUR: raw fees (15 and 12 cents) fall below the EUR floors
    let b = quote(100, BookingKind::Stay, false);
    assert_eq!(b.host_fee_cents, 30);
    assert_eq!(b.guest_fee_cents, 50);
}

#[test]
fn fifteen_eur_stay_not_clamped() {
    let b = quote(1500, BookingKind::Stay, false);
    assert_eq!(b.host_pct, dec!(0.15));
    assert_eq!(b.host_fee_cents, 225);
    assert_eq!(b.guest_fee_cents, 180);
}

#[test]
fn rate_is_non_increasing_across_bands() {
    let samples = [1500i64, 4000, 10000, 20000, 50000];
    for region in [
        Region::France,
        Region::Ab,
        Region::Bc,
        Region::On,
        Region::Qc,
        Region::Atl,
    ] {
        let mut prev_host = dec!(1);
        let mut prev_guest = dec!(1);
        for price in samples {
            let b = compute_fees(
                price,
                Currency::Cad,
                region,
                BookingKind::Stay,
                false,
                &RateOverrides::default(),
            )
            .unwrap();
            assert!(b.host_pct <= prev_host, "host% rose at {} in {:?}", price, region);
            assert!(b.guest_pct <= prev_guest, "guest% rose at {} in {:?}", price, region);
            prev_host = b.host_pct;
            prev_guest = b.guest_pct;
        }
    }
}

#[test]
fn superhost_pays_less_host_fee() {
    let normal = quote(10000, BookingKind::Stay, false);
    let star = quote(10000, BookingKind::Stay, true);
    assert!(star.host_fee_cents < normal.host_fee_cents);
    assert_eq!(star.guest_fee_cents, normal.guest_fee_cents);
    assert_eq!(star.host_pct, dec!(0.11) * dec!(0.85));
    assert_eq!(star.trace.host_pct_raw, dec!(0.11));
}

#[test]
fn superhost_never_pays_more_even_at_the_floor() {
    // Both land on the 30-cent floor, so equal is acceptable
    let normal = quote(100, BookingKind::Stay, false);
    let star = quote(100, BookingKind::Stay, true);
    assert!(star.host_fee_cents <= normal.host_fee_cents);
}

#[test]
fn booking_kinds_order_fees() {
    let parking = quote(10000, BookingKind::Parking, false);
    let stay = quote(10000, BookingKind::Stay, false);
    let meeting = quote(10000, BookingKind::Meeting, false);
    assert!(parking.host_fee_cents < stay.host_fee_cents);
    assert!(stay.host_fee_cents < meeting.host_fee_cents);
    assert!(parking.guest_fee_cents < stay.guest_fee_cents);
    assert!(stay.guest_fee_cents < meeting.guest_fee_cents);
}

#[test]
fn fees_stay_inside_the_currency_clamps() {
    for currency in Currency::ALL {
        let p = currency.profile();
        for price in [1i64, 100, 1500, 10000, 100000, 5_000_000] {
            let b = compute_fees(
                price,
                currency,
                Region::Qc,
                BookingKind::Meeting,
                false,
                &RateOverrides::default(),
            )
            .unwrap();
            assert!(b.host_fee_cents >= p.host_fee_min_cents);
            assert!(b.host_fee_cents <= p.host_fee_max_cents);
            assert!(b.guest_fee_cents >= p.guest_fee_min_cents);
            assert!(b.guest_fee_cents <= p.guest_fee_max_cents);
        }
    }
}

#[test]
fn identical_inputs_give_identical_breakdowns() {
    let a = quote(12345, BookingKind::Cowork, true);
    let b = quote(12345, BookingKind::Cowork, true);
    assert_eq!(a, b);
}

#[test]
fn non_positive_price_is_rejected() {
    for price in [0i64, -500] {
        let err = compute_fees(
            price,
            Currency::Eur,
            Region::France,
            BookingKind::Stay,
            false,
            &RateOverrides::default(),
        )
        .unwrap_err();
        assert_eq!(err, PricingError::InvalidPrice(price));
    }
}

#[test]
fn overrides_replace_computed_rates() {
    let overrides = RateOverrides {
        host_pct: Some(dec!(0.10)),
        guest_pct: None,
        tax_rate: Some(dec!(0)),
    };
    // Superhost discount would give 0.13 * 0.85; the override wins outright
    let b = compute_fees(
        2000,
        Currency::Eur,
        Region::France,
        BookingKind::Stay,
        true,
        &overrides,
    )
    .unwrap();
    assert_eq!(b.host_pct, dec!(0.10));
    assert_eq!(b.host_fee_cents, 200);
    assert_eq!(b.tax_on_guest_fee_cents, 0);
    // Raw tier rates still recorded for audit
    assert_eq!(b.trace.host_pct_raw, dec!(0.13));
}

#[test]
fn provincial_tax_applies_to_guest_fee_only() {
    let b = compute_fees(
        10000,
        Currency::Cad,
        Region::On,
        BookingKind::Stay,
        false,
        &RateOverrides::default(),
    )
    .unwrap();
    // ON: guest 10% of 100 CAD = 1000, HST 13% on the fee only
    assert_eq!(b.guest_fee_cents, 1000);
    assert_eq!(b.tax_on_guest_fee_cents, 130);
    assert_eq!(b.charge_cents, 10000 + 1000 + 130);
    assert_eq!(b.host_payout_cents, 10000 - b.host_fee_cents);
}
