// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cancel::compute_policy;
use crate::utils::{maybe_print_json, parse_datetime, pretty_table};
use anyhow::Result;
use chrono::Utc;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let start = parse_datetime(m.get_one::<String>("start").unwrap())?;
    let price = *m.get_one::<i64>("price").unwrap();
    let fee = *m.get_one::<i64>("fee").unwrap();
    let duration_hours = *m.get_one::<i64>("duration-hours").unwrap();
    let now = match m.get_one::<String>("at") {
        Some(s) => parse_datetime(s)?,
        None => Utc::now(),
    };

    let policy = compute_policy(start, now, price, fee, duration_hours)?;

    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &policy)? {
        return Ok(());
    }
    let data = vec![
        vec!["Policy".into(), policy.policy_type.code().to_string()],
        vec!["Refund".into(), format!("{}", policy.refund_cents)],
        vec![
            "Service fee retained".into(),
            format!("{}", policy.service_fee_retained_cents),
        ],
        vec!["Guest penalty".into(), format!("{}", policy.guest_penalty_cents)],
        vec![
            "Host compensation".into(),
            format!("{}", policy.host_compensation_cents),
        ],
    ];
    println!("{}", pretty_table(&["Item", "Minor units"], data));
    println!("{}", policy.message);
    Ok(())
}
