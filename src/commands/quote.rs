// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fees::compute_fees;
use crate::models::{BookingKind, Currency, Money, RateOverrides};
use crate::region::infer_region;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let price = *m.get_one::<i64>("price").unwrap();
    let currency: Currency = m.get_one::<String>("currency").unwrap().parse()?;
    let country = m.get_one::<String>("country").map(|s| s.as_str());
    let province = m.get_one::<String>("province").map(|s| s.as_str());
    let kind: BookingKind = m.get_one::<String>("kind").unwrap().parse()?;
    let superhost = m.get_flag("superhost");

    let mut overrides = RateOverrides::default();
    if let Some(s) = m.get_one::<String>("host-pct") {
        overrides.host_pct = Some(parse_decimal(s)?);
    }
    if let Some(s) = m.get_one::<String>("guest-pct") {
        overrides.guest_pct = Some(parse_decimal(s)?);
    }
    if let Some(s) = m.get_one::<String>("tax-rate") {
        overrides.tax_rate = Some(parse_decimal(s)?);
    }

    let region = infer_region(currency, country, province);
    let b = compute_fees(price, currency, region, kind, superhost, &overrides)?;

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &b)? {
        return Ok(());
    }

    let money = |cents: i64| Money::new(cents, currency).to_string();
    let data = vec![
        vec!["Region".into(), region.to_string()],
        vec!["Price".into(), money(b.price_cents)],
        vec![
            format!("Host fee ({}%)", b.host_pct * rust_decimal::Decimal::ONE_HUNDRED),
            money(b.host_fee_cents),
        ],
        vec![
            format!("Guest fee ({}%)", b.guest_pct * rust_decimal::Decimal::ONE_HUNDRED),
            money(b.guest_fee_cents),
        ],
        vec!["Tax on guest fee".into(), money(b.tax_on_guest_fee_cents)],
        vec!["Guest pays".into(), money(b.charge_cents)],
        vec!["Host payout".into(), money(b.host_payout_cents)],
        vec!["Processor estimate".into(), money(b.stripe_estimate_cents)],
        vec!["Platform gross".into(), money(b.platform_gross_cents)],
        vec!["Platform net".into(), money(b.platform_net_cents)],
    ];
    println!("{}", pretty_table(&["Item", "Amount"], data));
    Ok(())
}
