// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::convert::{Convert, DirectConverter};
use crate::models::Currency;
use crate::rates::RateStore;
use crate::utils::parse_decimal;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(m.get_one::<String>("amount").unwrap())?;
    let from: Currency = m.get_one::<String>("from").unwrap().parse()?;
    let to: Currency = m.get_one::<String>("to").unwrap().parse()?;

    let store = RateStore::open_default()?;
    let converter = DirectConverter::new(&store);
    let res = converter.convert(amount, from, to)?;
    println!("{} {} -> {} {}", amount, from, res, to);
    Ok(())
}
