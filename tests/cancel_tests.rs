// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use feewise::compute_policy;
use feewise::error::PricingError;
use feewise::models::{PolicyType, RefundTier};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
}

#[test]
fn daily_full_refund_at_exactly_72h() {
    let start = now() + Duration::hours(72);
    let p = compute_policy(start, now(), 10000, 300, 48).unwrap();
    assert_eq!(p.tier, RefundTier::FullMinusFee);
    assert_eq!(p.policy_type, PolicyType::Daily);
    // Fee retained is capped at min(5% of price, 2.50): 250
    assert_eq!(p.service_fee_retained_cents, 250);
    assert_eq!(p.refund_cents, 9750);
    assert_eq!(p.host_compensation_cents, 0);
    assert_eq!(p.guest_penalty_cents, 250);
}

#[test]
fn daily_half_refund_one_minute_inside_the_band() {
    let start = now() + Duration::minutes(72 * 60 - 1);
    let p = compute_policy(start, now(), 10000, 300, 48).unwrap();
    assert_eq!(p.tier, RefundTier::Half);
    assert_eq!(p.refund_cents, 5000);
    assert_eq!(p.service_fee_retained_cents, 300);
    assert_eq!(p.host_compensation_cents, 4700);
    // Accounting identity: every cent the guest paid is assigned somewhere
    assert_eq!(
        p.refund_cents + p.service_fee_retained_cents + p.host_compensation_cents,
        10000
    );
}

#[test]
fn daily_boundary_at_24h_belongs_to_the_half_band() {
    let start = now() + Duration::hours(24);
    let p = compute_policy(start, now(), 10000, 300, 48).unwrap();
    assert_eq!(p.tier, RefundTier::Half);
}

#[test]
fn daily_no_refund_under_24h() {
    let start = now() + Duration::minutes(24 * 60 - 1);
    let p = compute_policy(start, now(), 10000, 300, 48).unwrap();
    assert_eq!(p.tier, RefundTier::Zero);
    assert_eq!(p.refund_cents, 0);
    assert_eq!(p.guest_penalty_cents, 10000);
    assert_eq!(p.host_compensation_cents, 9700);
}

#[test]
fn hourly_regime_for_short_bookings() {
    // 3-hour booking: 6h/2h thresholds
    let p = compute_policy(now() + Duration::hours(6), now(), 2000, 100, 3).unwrap();
    assert_eq!(p.policy_type, PolicyType::Hourly);
    assert_eq!(p.tier, RefundTier::FullMinusFee);
    // Cap is min(5% of 2000, 250) = 100, the whole fee
    assert_eq!(p.service_fee_retained_cents, 100);
    assert_eq!(p.refund_cents, 1900);

    let p = compute_policy(now() + Duration::hours(2), now(), 2000, 100, 3).unwrap();
    assert_eq!(p.tier, RefundTier::Half);
    assert_eq!(p.refund_cents, 1000);

    let p = compute_policy(now() + Duration::minutes(119), now(), 2000, 100, 3).unwrap();
    assert_eq!(p.tier, RefundTier::Zero);
}

#[test]
fn small_service_fee_is_retained_in_full() {
    let start = now() + Duration::hours(100);
    let p = compute_policy(start, now(), 10000, 100, 48).unwrap();
    assert_eq!(p.service_fee_retained_cents, 100);
    assert_eq!(p.refund_cents, 9900);
}

#[test]
fn half_tier_keeps_every_cent_accounted_when_the_fee_is_large() {
    // A 1-cent-scale booking picks up the guest-fee floor, so the fee can
    // exceed half of what the guest paid
    let start = now() + Duration::hours(48);
    let p = compute_policy(start, now(), 61, 50, 48).unwrap();
    assert_eq!(p.tier, RefundTier::Half);
    assert_eq!(p.refund_cents, 30);
    assert_eq!(p.service_fee_retained_cents, 31);
    assert_eq!(p.host_compensation_cents, 0);
    assert_eq!(
        p.refund_cents + p.service_fee_retained_cents + p.host_compensation_cents,
        61
    );
}

#[test]
fn zero_tier_retains_at_most_the_amount_paid() {
    let start = now() + Duration::hours(1);
    let p = compute_policy(start, now(), 40, 50, 12).unwrap();
    assert_eq!(p.tier, RefundTier::Zero);
    assert_eq!(p.refund_cents, 0);
    assert_eq!(p.service_fee_retained_cents, 40);
    assert_eq!(p.host_compensation_cents, 0);
    assert_eq!(
        p.refund_cents + p.service_fee_retained_cents + p.host_compensation_cents,
        40
    );
}

#[test]
fn cancelling_at_the_start_instant_is_still_allowed() {
    let p = compute_policy(now(), now(), 10000, 300, 48).unwrap();
    assert_eq!(p.tier, RefundTier::Zero);
}

#[test]
fn started_bookings_are_rejected() {
    let start = now() - Duration::minutes(90);
    let err = compute_policy(start, now(), 10000, 300, 48).unwrap_err();
    assert_eq!(err, PricingError::BookingAlreadyStarted(90));
}

#[test]
fn a_booking_started_seconds_ago_is_already_started() {
    let start = now() - Duration::seconds(30);
    let err = compute_policy(start, now(), 10000, 300, 48).unwrap_err();
    assert_eq!(err, PricingError::BookingAlreadyStarted(0));
}

#[test]
fn non_positive_price_is_rejected() {
    let start = now() + Duration::hours(72);
    let err = compute_policy(start, now(), 0, 0, 48).unwrap_err();
    assert_eq!(err, PricingError::InvalidPrice(0));
}
