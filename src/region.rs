// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Currency, Region};

/// Map (currency, country, subdivision) to the fee region.
///
/// EUR bookings are always France, whatever the address says. Otherwise the
/// subdivision code wins: the four large provinces map directly and the
/// Atlantic provinces (NB, NS, NL, PE) share one tier table. Without a usable
/// subdivision, a Canadian country field defaults to QC. Anything else falls
/// back to France; callers that care about unrecognized input must check
/// before calling.
pub fn infer_region(
    currency: Currency,
    country: Option<&str>,
    subdivision: Option<&str>,
) -> Region {
    if currency == Currency::Eur {
        return Region::France;
    }
    if let Some(code) = subdivision {
        match code.trim().to_uppercase().as_str() {
            "AB" => return Region::Ab,
            "BC" => return Region::Bc,
            "ON" => return Region::On,
            "QC" => return Region::Qc,
            "NB" | "NS" | "NL" | "PE" => return Region::Atl,
            _ => {}
        }
    }
    if let Some(name) = country {
        let name = name.trim().to_lowercase();
        if name == "canada" || name == "ca" {
            return Region::Qc;
        }
    }
    Region::France
}
