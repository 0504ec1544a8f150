// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Region;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Base commission rates for one price band, before booking-kind multipliers
/// and the superhost discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRates {
    pub host_pct: Decimal,
    pub guest_pct: Decimal,
}

// Band upper bounds in minor units: <20, <60, <150, <300, >=300 major units.
const BAND_EDGES_CENTS: [i64; 4] = [2000, 6000, 15000, 30000];

fn band_index(price_cents: i64) -> usize {
    BAND_EDGES_CENTS
        .iter()
        .position(|edge| price_cents < *edge)
        .unwrap_or(BAND_EDGES_CENTS.len())
}

fn bands(region: Region) -> [(Decimal, Decimal); 5] {
    match region {
        Region::France => [
            (dec!(0.15), dec!(0.12)),
            (dec!(0.13), dec!(0.10)),
            (dec!(0.11), dec!(0.09)),
            (dec!(0.09), dec!(0.08)),
            (dec!(0.07), dec!(0.06)),
        ],
        Region::Qc => [
            (dec!(0.16), dec!(0.13)),
            (dec!(0.14), dec!(0.11)),
            (dec!(0.12), dec!(0.09)),
            (dec!(0.10), dec!(0.08)),
            (dec!(0.08), dec!(0.07)),
        ],
        Region::On => [
            (dec!(0.16), dec!(0.13)),
            (dec!(0.14), dec!(0.11)),
            (dec!(0.12), dec!(0.10)),
            (dec!(0.10), dec!(0.08)),
            (dec!(0.08), dec!(0.07)),
        ],
        Region::Bc => [
            (dec!(0.15), dec!(0.12)),
            (dec!(0.13), dec!(0.11)),
            (dec!(0.12), dec!(0.09)),
            (dec!(0.10), dec!(0.08)),
            (dec!(0.08), dec!(0.06)),
        ],
        Region::Ab => [
            (dec!(0.15), dec!(0.12)),
            (dec!(0.13), dec!(0.10)),
            (dec!(0.11), dec!(0.09)),
            (dec!(0.09), dec!(0.08)),
            (dec!(0.08), dec!(0.06)),
        ],
        Region::Atl => [
            (dec!(0.16), dec!(0.13)),
            (dec!(0.14), dec!(0.12)),
            (dec!(0.12), dec!(0.10)),
            (dec!(0.10), dec!(0.08)),
            (dec!(0.08), dec!(0.07)),
        ],
    }
}

/// Step function from price to base commission rates for a region.
pub fn base_rates(region: Region, price_cents: i64) -> TierRates {
    let (host_pct, guest_pct) = bands(region)[band_index(price_cents)];
    TierRates {
        host_pct,
        guest_pct,
    }
}

/// Sales-tax rate applied to the guest fee, by jurisdiction. France carries
/// VAT; each province its combined GST/PST or HST.
pub fn tax_rate(region: Region) -> Decimal {
    match region {
        Region::France => dec!(0.20),
        Region::Qc => dec!(0.14975),
        Region::On => dec!(0.13),
        Region::Bc => dec!(0.12),
        Region::Ab => dec!(0.05),
        Region::Atl => dec!(0.15),
    }
}

/// Host-side commission factor for superhosts. The guest side is untouched.
pub fn superhost_host_factor() -> Decimal {
    dec!(0.85)
}
