// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::PricingError;
use crate::models::{BookingKind, Currency, FeeBreakdown, FeeTrace, RateOverrides, Region};
use crate::tiers;
use crate::utils::ceil_mul_cents;

/// Compute the full fee breakdown for one booking.
///
/// The tier table gives base host/guest rates for the region and price band;
/// the booking-kind multipliers and superhost discount adjust them; caller
/// overrides then replace whatever was computed. Fees round up, get clamped to
/// the currency's floor/ceiling, and tax applies to the guest fee only.
///
/// Deterministic: identical inputs always produce an identical breakdown.
pub fn compute_fees(
    price_cents: i64,
    currency: Currency,
    region: Region,
    kind: BookingKind,
    superhost: bool,
    overrides: &RateOverrides,
) -> Result<FeeBreakdown, PricingError> {
    if price_cents <= 0 {
        return Err(PricingError::InvalidPrice(price_cents));
    }

    let base = tiers::base_rates(region, price_cents);
    let tax_rate_raw = tiers::tax_rate(region);

    let (host_mult, guest_mult) = kind.multipliers();
    let mut host_pct = base.host_pct * host_mult;
    let guest_pct = base.guest_pct * guest_mult;
    if superhost {
        host_pct *= tiers::superhost_host_factor();
    }

    let host_pct = overrides.host_pct.unwrap_or(host_pct);
    let guest_pct = overrides.guest_pct.unwrap_or(guest_pct);
    let tax_rate = overrides.tax_rate.unwrap_or(tax_rate_raw);

    let profile = currency.profile();
    let host_fee_cents = ceil_mul_cents(price_cents, host_pct)
        .clamp(profile.host_fee_min_cents, profile.host_fee_max_cents);
    let guest_fee_cents = ceil_mul_cents(price_cents, guest_pct)
        .clamp(profile.guest_fee_min_cents, profile.guest_fee_max_cents);

    // Tax never applies to the host fee.
    let tax_on_guest_fee_cents = ceil_mul_cents(guest_fee_cents, tax_rate);

    let charge_cents = price_cents + guest_fee_cents + tax_on_guest_fee_cents;
    // Gross payout; cancellation adjustments happen downstream.
    let host_payout_cents = price_cents - host_fee_cents;

    let stripe_estimate_cents =
        ceil_mul_cents(charge_cents, profile.processor_pct) + profile.processor_fixed_cents;

    let platform_gross_cents = host_fee_cents + guest_fee_cents + tax_on_guest_fee_cents;
    let platform_net_cents = platform_gross_cents - stripe_estimate_cents;

    Ok(FeeBreakdown {
        price_cents,
        host_pct,
        guest_pct,
        tax_rate,
        host_fee_cents,
        guest_fee_cents,
        tax_on_guest_fee_cents,
        charge_cents,
        host_payout_cents,
        stripe_estimate_cents,
        platform_gross_cents,
        platform_net_cents,
        trace: FeeTrace {
            price_cents,
            currency,
            region,
            kind,
            superhost,
            host_pct_raw: base.host_pct,
            guest_pct_raw: base.guest_pct,
            tax_rate_raw,
        },
    })
}
