// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use crate::rates::RateStore;
use crate::utils::{ceil_2dp, http_client};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Currency conversion seam. Checkout code holds a `&dyn Convert` and gets
/// either the in-process implementation or the HTTP one, chosen at
/// construction.
pub trait Convert {
    /// Convert a major-unit amount. The result is normalized to two decimals,
    /// always rounded up: the margin comes from the destination markup plus
    /// this upward rounding, and a conversion must never undercharge.
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal>;
}

/// Converter backed directly by a `RateStore`.
pub struct DirectConverter<'a> {
    store: &'a RateStore,
}

impl<'a> DirectConverter<'a> {
    pub fn new(store: &'a RateStore) -> Self {
        DirectConverter { store }
    }
}

impl Convert for DirectConverter<'_> {
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(ceil_2dp(amount));
        }
        // The derived table is complete; `None` only if that ever changes,
        // and then 1 keeps the charge at least the source amount.
        let base_rate = self.store.rate(from, to).unwrap_or(Decimal::ONE);
        let effective = base_rate * (Decimal::ONE + to.profile().markup);
        Ok(ceil_2dp(amount * effective))
    }
}

/// Converter that delegates to a remote conversion endpoint. Used by processes
/// that do not own a rate store of their own.
pub struct RemoteConverter {
    endpoint: String,
}

impl RemoteConverter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RemoteConverter {
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    result: f64,
}

impl Convert for RemoteConverter {
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(ceil_2dp(amount));
        }
        let url = format!(
            "{}?amount={}&from={}&to={}",
            self.endpoint,
            amount,
            from.code(),
            to.code()
        );
        let client = http_client()?;
        let resp = client.get(url).send()?.error_for_status()?;
        let body: ConvertResponse = resp.json()?;
        let converted = Decimal::try_from(body.result)
            .with_context(|| format!("Invalid conversion result {}", body.result))?;
        Ok(ceil_2dp(converted))
    }
}
