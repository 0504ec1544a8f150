// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::PricingError;
use crate::models::{CancellationPolicy, PolicyType, RefundTier};
use crate::utils::ceil_mul_cents;
use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

/// Ceiling on the service fee retained in the full-refund tier, minor units.
pub const FULL_REFUND_FEE_CAP_CENTS: i64 = 250;

const DAILY_FULL_MINUTES: i64 = 72 * 60;
const DAILY_HALF_MINUTES: i64 = 24 * 60;
const HOURLY_FULL_MINUTES: i64 = 6 * 60;
const HOURLY_HALF_MINUTES: i64 = 2 * 60;

/// Refund decision for a cancellation at `now` of a booking starting at
/// `start`.
///
/// `total_price_cents` is the amount the guest paid and `service_fee_cents`
/// the service-fee portion inside it. Bookings of 24 hours or more use the
/// daily thresholds (72h/24h), shorter ones the hourly thresholds (6h/2h);
/// an exact boundary falls in the more generous band. In the full-refund tier
/// the platform keeps the service fee capped at 5% of the price, at most
/// 2.50 major units. Whatever the guest does not get back, beyond the retained
/// fee, goes to the host as compensation, so
/// `refund + retained fee + host compensation == total price` in every tier.
///
/// Cancelling a booking that already started is an error; no-show handling
/// lives elsewhere.
pub fn compute_policy(
    start: DateTime<Utc>,
    now: DateTime<Utc>,
    total_price_cents: i64,
    service_fee_cents: i64,
    duration_hours: i64,
) -> Result<CancellationPolicy, PricingError> {
    if total_price_cents <= 0 {
        return Err(PricingError::InvalidPrice(total_price_cents));
    }
    let until = start - now;
    // Sub-minute overruns must still be rejected; minutes alone truncate to 0.
    if until.num_seconds() < 0 {
        return Err(PricingError::BookingAlreadyStarted(-until.num_minutes()));
    }
    let minutes_until = until.num_minutes();

    let policy_type = if duration_hours >= 24 {
        PolicyType::Daily
    } else {
        PolicyType::Hourly
    };
    let (full_min, half_min) = match policy_type {
        PolicyType::Daily => (DAILY_FULL_MINUTES, DAILY_HALF_MINUTES),
        PolicyType::Hourly => (HOURLY_FULL_MINUTES, HOURLY_HALF_MINUTES),
    };

    let tier = if minutes_until >= full_min {
        RefundTier::FullMinusFee
    } else if minutes_until >= half_min {
        RefundTier::Half
    } else {
        RefundTier::Zero
    };

    let (refund_cents, service_fee_retained_cents, message) = match tier {
        RefundTier::FullMinusFee => {
            let cap =
                ceil_mul_cents(total_price_cents, dec!(0.05)).min(FULL_REFUND_FEE_CAP_CENTS);
            let retained = service_fee_cents.min(cap);
            (
                total_price_cents - retained,
                retained,
                "Full refund minus the service fee.".to_string(),
            )
        }
        RefundTier::Half => {
            let refund = total_price_cents / 2;
            // The retained fee can never exceed what the guest forfeits.
            (
                refund,
                service_fee_cents.min(total_price_cents - refund),
                "50% refund; the service fee is not refundable.".to_string(),
            )
        }
        RefundTier::Zero => (
            0,
            service_fee_cents.min(total_price_cents),
            "No refund this close to the start time.".to_string(),
        ),
    };

    let guest_penalty_cents = total_price_cents - refund_cents;
    let host_compensation_cents = total_price_cents - refund_cents - service_fee_retained_cents;

    Ok(CancellationPolicy {
        refund_cents,
        service_fee_retained_cents,
        guest_penalty_cents,
        host_compensation_cents,
        tier,
        policy_type,
        message,
    })
}
