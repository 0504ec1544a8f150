// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use crate::region::infer_region;
use crate::tiers;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let currency: Currency = m.get_one::<String>("currency").unwrap().parse()?;
    let country = m.get_one::<String>("country").map(|s| s.as_str());
    let province = m.get_one::<String>("province").map(|s| s.as_str());

    let region = infer_region(currency, country, province);

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &region)? {
        return Ok(());
    }
    let data = vec![vec![
        currency.to_string(),
        country.unwrap_or("-").to_string(),
        province.unwrap_or("-").to_string(),
        region.to_string(),
        tiers::tax_rate(region).to_string(),
    ]];
    println!(
        "{}",
        pretty_table(&["Currency", "Country", "Province", "Region", "Tax rate"], data)
    );
    Ok(())
}
