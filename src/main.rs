// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use feewise::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("quote", sub)) => commands::quote::handle(sub)?,
        Some(("region", sub)) => commands::region::handle(sub)?,
        Some(("convert", sub)) => commands::convert::handle(sub)?,
        Some(("rates", sub)) => commands::rates::handle(sub)?,
        Some(("cancel", sub)) => commands::cancel::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
