// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::PricingError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Cad,
    Usd,
    Gbp,
    Cny,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Eur,
        Currency::Cad,
        Currency::Usd,
        Currency::Gbp,
        Currency::Cny,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Cad => "CAD",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Cny => "CNY",
        }
    }

    /// All per-currency pricing constants in one place. A new variant does not
    /// compile until every field below has a value for it.
    pub fn profile(self) -> CurrencyProfile {
        match self {
            Currency::Eur => CurrencyProfile {
                fallback_rate: dec!(1.0),
                markup: dec!(0.00),
                processor_pct: dec!(0.015),
                processor_fixed_cents: 25,
                host_fee_min_cents: 30,
                host_fee_max_cents: 2500,
                guest_fee_min_cents: 50,
                guest_fee_max_cents: 5000,
            },
            Currency::Cad => CurrencyProfile {
                fallback_rate: dec!(1.62),
                markup: dec!(0.03),
                processor_pct: dec!(0.029),
                processor_fixed_cents: 30,
                host_fee_min_cents: 50,
                host_fee_max_cents: 4000,
                guest_fee_min_cents: 75,
                guest_fee_max_cents: 8000,
            },
            // Non-EUR, non-CAD currencies reuse the EU processor parameters.
            Currency::Usd => CurrencyProfile {
                fallback_rate: dec!(1.16),
                markup: dec!(0.06),
                processor_pct: dec!(0.015),
                processor_fixed_cents: 25,
                host_fee_min_cents: 35,
                host_fee_max_cents: 3000,
                guest_fee_min_cents: 55,
                guest_fee_max_cents: 5500,
            },
            Currency::Gbp => CurrencyProfile {
                fallback_rate: dec!(0.88),
                markup: dec!(0.03),
                processor_pct: dec!(0.015),
                processor_fixed_cents: 25,
                host_fee_min_cents: 25,
                host_fee_max_cents: 2200,
                guest_fee_min_cents: 45,
                guest_fee_max_cents: 4500,
            },
            Currency::Cny => CurrencyProfile {
                fallback_rate: dec!(8.2),
                markup: dec!(0.03),
                processor_pct: dec!(0.015),
                processor_fixed_cents: 25,
                host_fee_min_cents: 200,
                host_fee_max_cents: 20000,
                guest_fee_min_cents: 400,
                guest_fee_max_cents: 40000,
            },
        }
    }
}

impl FromStr for Currency {
    type Err = PricingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "CAD" => Ok(Currency::Cad),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            "CNY" => Ok(Currency::Cny),
            other => Err(PricingError::UnknownCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Anchor rate (units per 1 EUR), conversion markup, processor-fee estimate
/// parameters, and fee clamps for one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyProfile {
    pub fallback_rate: Decimal,
    pub markup: Decimal,
    pub processor_pct: Decimal,
    pub processor_fixed_cents: i64,
    pub host_fee_min_cents: i64,
    pub host_fee_max_cents: i64,
    pub guest_fee_min_cents: i64,
    pub guest_fee_max_cents: i64,
}

/// Fee-tier jurisdiction. Derived from (currency, country, subdivision) via
/// `region::infer_region`; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    France,
    Ab,
    Bc,
    On,
    Qc,
    Atl,
}

impl Region {
    pub fn code(self) -> &'static str {
        match self {
            Region::France => "FRANCE",
            Region::Ab => "AB",
            Region::Bc => "BC",
            Region::On => "ON",
            Region::Qc => "QC",
            Region::Atl => "ATL",
        }
    }
}

impl FromStr for Region {
    type Err = PricingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FRANCE" => Ok(Region::France),
            "AB" => Ok(Region::Ab),
            "BC" => Ok(Region::Bc),
            "ON" => Ok(Region::On),
            "QC" => Ok(Region::Qc),
            "ATL" => Ok(Region::Atl),
            other => Err(PricingError::UnknownRegion(other.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Stay,
    Parking,
    Cowork,
    Meeting,
}

impl BookingKind {
    /// (host multiplier, guest multiplier) applied on top of the tier rates.
    pub fn multipliers(self) -> (Decimal, Decimal) {
        match self {
            BookingKind::Stay => (dec!(1.0), dec!(1.0)),
            BookingKind::Parking => (dec!(0.7), dec!(0.7)),
            BookingKind::Cowork => (dec!(1.1), dec!(1.05)),
            BookingKind::Meeting => (dec!(1.15), dec!(1.1)),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            BookingKind::Stay => "stay",
            BookingKind::Parking => "parking",
            BookingKind::Cowork => "cowork",
            BookingKind::Meeting => "meeting",
        }
    }
}

impl FromStr for BookingKind {
    type Err = PricingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stay" => Ok(BookingKind::Stay),
            "parking" => Ok(BookingKind::Parking),
            "cowork" => Ok(BookingKind::Cowork),
            "meeting" => Ok(BookingKind::Meeting),
            other => Err(PricingError::UnknownBookingKind(other.to_string())),
        }
    }
}

/// Integer minor-unit amount tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(cents: i64, currency: Currency) -> Self {
        Money { cents, currency }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{}{}.{:02} {}", sign, abs / 100, abs % 100, self.currency)
    }
}

/// Caller-supplied replacements for the computed rates. An override replaces
/// the computed value outright; it is not combined with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateOverrides {
    pub host_pct: Option<Decimal>,
    pub guest_pct: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
}

/// The inputs and pre-multiplier rates that produced a breakdown, kept for
/// audit and analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeTrace {
    pub price_cents: i64,
    pub currency: Currency,
    pub region: Region,
    pub kind: BookingKind,
    pub superhost: bool,
    pub host_pct_raw: Decimal,
    pub guest_pct_raw: Decimal,
    pub tax_rate_raw: Decimal,
}

/// Immutable result of a fee computation. All amounts are minor units in the
/// breakdown's currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeBreakdown {
    pub price_cents: i64,
    pub host_pct: Decimal,
    pub guest_pct: Decimal,
    pub tax_rate: Decimal,
    pub host_fee_cents: i64,
    pub guest_fee_cents: i64,
    pub tax_on_guest_fee_cents: i64,
    pub charge_cents: i64,
    pub host_payout_cents: i64,
    pub stripe_estimate_cents: i64,
    pub platform_gross_cents: i64,
    pub platform_net_cents: i64,
    pub trace: FeeTrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundTier {
    FullMinusFee,
    Half,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    Daily,
    Hourly,
}

impl PolicyType {
    pub fn code(self) -> &'static str {
        match self {
            PolicyType::Daily => "daily",
            PolicyType::Hourly => "hourly",
        }
    }
}

/// Refund decision for one cancellation, computed at preview time and again at
/// confirm time. `refund_cents + service_fee_retained_cents +
/// host_compensation_cents` always equals the amount the guest paid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancellationPolicy {
    pub refund_cents: i64,
    pub service_fee_retained_cents: i64,
    pub guest_penalty_cents: i64,
    pub host_compensation_cents: i64,
    pub tier: RefundTier,
    pub policy_type: PolicyType,
    pub message: String,
}
