// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("feewise")
        .about("Marketplace pricing: fee quotes, currency conversion, cancellation refunds")
        .version(clap::crate_version!())
        .arg_required_else_help(false)
        .subcommand(json_flags(
            Command::new("quote")
                .about("Compute the fee breakdown for a booking")
                .arg(
                    Arg::new("price")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Booking price in minor units (cents)"),
                )
                .arg(Arg::new("currency").required(true).help("EUR, CAD, USD, GBP or CNY"))
                .arg(Arg::new("country").long("country").help("Listing country"))
                .arg(
                    Arg::new("province")
                        .long("province")
                        .help("Subdivision code (AB, BC, ON, QC, NB, NS, NL, PE)"),
                )
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("stay")
                        .help("stay, parking, cowork or meeting"),
                )
                .arg(
                    Arg::new("superhost")
                        .long("superhost")
                        .action(ArgAction::SetTrue)
                        .help("Apply the superhost host-side discount"),
                )
                .arg(Arg::new("host-pct").long("host-pct").help("Override host rate, e.g. 0.10"))
                .arg(Arg::new("guest-pct").long("guest-pct").help("Override guest rate"))
                .arg(Arg::new("tax-rate").long("tax-rate").help("Override tax rate")),
        ))
        .subcommand(json_flags(
            Command::new("region")
                .about("Infer the fee region for a currency/country/province")
                .arg(Arg::new("currency").required(true))
                .arg(Arg::new("country").long("country"))
                .arg(Arg::new("province").long("province")),
        ))
        .subcommand(
            Command::new("convert")
                .about("Convert an amount between currencies, markup included")
                .arg(Arg::new("amount").required(true).help("Amount in major units, e.g. 120.50"))
                .arg(Arg::new("from").required(true))
                .arg(Arg::new("to").required(true)),
        )
        .subcommand(
            Command::new("rates")
                .about("Inspect the cached exchange-rate table")
                .subcommand(Command::new("fetch").about("Refresh rates (honors the cache TTL)"))
                .subcommand(Command::new("list").about("List the current pairwise table")),
        )
        .subcommand(json_flags(
            Command::new("cancel")
                .about("Preview the refund for cancelling a booking")
                .arg(
                    Arg::new("start")
                        .required(true)
                        .help("Booking start, RFC 3339 (e.g. 2026-09-01T14:00:00Z)"),
                )
                .arg(
                    Arg::new("price")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Amount the guest paid, minor units"),
                )
                .arg(
                    Arg::new("fee")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .help("Service-fee portion of the price, minor units"),
                )
                .arg(
                    Arg::new("duration-hours")
                        .long("duration-hours")
                        .default_value("24")
                        .value_parser(value_parser!(i64))
                        .help("Booking length in hours"),
                )
                .arg(
                    Arg::new("at")
                        .long("at")
                        .help("Cancellation time, RFC 3339 (defaults to now)"),
                ),
        ))
}
