// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use crate::rates::RateStore;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("fetch", _)) => fetch()?,
        Some(("list", _)) => list()?,
        _ => {}
    }
    Ok(())
}

fn fetch() -> Result<()> {
    let store = RateStore::open_default()?;
    let tables = store.get_rates();
    println!(
        "Rates cached for {} currencies at {}",
        tables.len(),
        store.cache_path().display()
    );
    Ok(())
}

fn list() -> Result<()> {
    let store = RateStore::open_default()?;
    let tables = store.get_rates();
    let mut data = Vec::new();
    for from in Currency::ALL {
        for to in Currency::ALL {
            if let Some(rate) = tables.get(&from).and_then(|m| m.get(&to)) {
                data.push(vec![
                    from.to_string(),
                    to.to_string(),
                    rate.round_dp(6).to_string(),
                    (rate * (rust_decimal::Decimal::ONE + to.profile().markup))
                        .round_dp(6)
                        .to_string(),
                ]);
            }
        }
    }
    println!(
        "{}",
        pretty_table(&["From", "To", "Rate", "With markup"], data)
    );
    Ok(())
}
