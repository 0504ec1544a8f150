// Copyright (c) 2025 Feewise Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;
use crate::utils::http_client;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Pairwise multiplicative rates: `tables[from][to]` converts one unit of
/// `from` into units of `to`. Derived from a single set of base-currency
/// anchors, so the table is always complete and self-rates are 1.
pub type RatesTable = HashMap<Currency, HashMap<Currency, Decimal>>;

pub const RATES_TTL_MS: i64 = 5 * 60 * 1000;

pub const DEFAULT_RATE_ENDPOINT: &str = "https://api.exchangerate.host/latest";

pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Source of anchor rates: units of each requested currency per one unit of
/// `base`. Every requested symbol must be present, finite and positive, or the
/// whole fetch counts as failed.
pub trait RateFetcher: Send + Sync {
    fn fetch(&self, base: Currency, symbols: &[Currency]) -> Result<HashMap<Currency, Decimal>>;
}

pub struct HttpRateFetcher {
    endpoint: String,
}

impl HttpRateFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpRateFetcher {
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

impl RateFetcher for HttpRateFetcher {
    fn fetch(&self, base: Currency, symbols: &[Currency]) -> Result<HashMap<Currency, Decimal>> {
        let to_param = symbols
            .iter()
            .map(|c| c.code())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}?base={}&symbols={}",
            self.endpoint,
            base.code(),
            to_param
        );
        let client = http_client()?;
        let resp = client.get(url).send()?.error_for_status()?;
        let body: RatesResponse = resp.json()?;
        let mut out = HashMap::new();
        for c in symbols {
            let v = body
                .rates
                .get(c.code())
                .copied()
                .with_context(|| format!("Rate source omitted {}", c.code()))?;
            if !v.is_finite() || v <= 0.0 {
                anyhow::bail!("Rate source returned invalid rate {} for {}", v, c.code());
            }
            let d = Decimal::try_from(v)
                .with_context(|| format!("Unrepresentable rate {} for {}", v, c.code()))?;
            out.insert(*c, d);
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheFile {
    #[serde(rename = "updatedAt")]
    updated_at: i64,
    tables: RatesTable,
}

/// Time-cached exchange-rate table.
///
/// Owns its cache-file path, TTL clock, and fetcher, so tests can substitute
/// all three. The in-memory copy sits behind a mutex; a refresh holds the lock,
/// which gives one fetch in flight while concurrent callers wait for it.
/// A fetch failure falls back to the hard-coded anchor table and is cached with
/// the normal TTL, so an outage costs one fetch attempt per window, not one per
/// request.
pub struct RateStore {
    cache_path: PathBuf,
    ttl_ms: i64,
    base: Currency,
    fetcher: Box<dyn RateFetcher>,
    clock: Box<dyn Clock>,
    cached: Mutex<Option<CacheFile>>,
}

impl RateStore {
    pub fn new(
        cache_path: PathBuf,
        ttl_ms: i64,
        fetcher: Box<dyn RateFetcher>,
        clock: Box<dyn Clock>,
    ) -> Self {
        RateStore {
            cache_path,
            ttl_ms,
            base: Currency::Eur,
            fetcher,
            clock,
            cached: Mutex::new(None),
        }
    }

    /// Store with the production endpoint, system clock, and platform cache dir.
    pub fn open_default() -> Result<Self> {
        Ok(RateStore::new(
            default_cache_path()?,
            RATES_TTL_MS,
            Box::new(HttpRateFetcher::new(DEFAULT_RATE_ENDPOINT)),
            Box::new(SystemClock),
        ))
    }

    pub fn cache_path(&self) -> &PathBuf {
        &self.cache_path
    }

    /// Current pairwise rate table, refreshed when the TTL has elapsed.
    /// Never fails: a fetch problem degrades to the fallback anchors.
    pub fn get_rates(&self) -> RatesTable {
        let mut guard = self.cached.lock().unwrap_or_else(|p| p.into_inner());
        let now = self.clock.now_ms();

        if let Some(entry) = guard.as_ref() {
            if now - entry.updated_at < self.ttl_ms {
                return entry.tables.clone();
            }
        } else if let Some(disk) = self.read_cache_file() {
            let fresh = now - disk.updated_at < self.ttl_ms;
            let tables = disk.tables.clone();
            *guard = Some(disk);
            if fresh {
                return tables;
            }
        }

        let tables = self.refresh();
        let entry = CacheFile {
            updated_at: now,
            tables: tables.clone(),
        };
        self.write_cache_file(&entry);
        *guard = Some(entry);
        tables
    }

    /// Rate from one currency to another, without markup.
    pub fn rate(&self, from: Currency, to: Currency) -> Option<Decimal> {
        self.get_rates().get(&from).and_then(|m| m.get(&to)).copied()
    }

    fn refresh(&self) -> RatesTable {
        match self
            .fetcher
            .fetch(self.base, &Currency::ALL)
            .and_then(validate_anchors)
        {
            Ok(anchors) => derive_tables(&anchors),
            Err(err) => {
                eprintln!("Rate fetch failed ({err:#}); using fallback anchors");
                derive_tables(&fallback_anchors())
            }
        }
    }

    fn read_cache_file(&self) -> Option<CacheFile> {
        let raw = fs::read_to_string(&self.cache_path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    // Best-effort: a failed write is logged and swallowed.
    fn write_cache_file(&self, entry: &CacheFile) {
        let res = (|| -> Result<()> {
            if let Some(dir) = self.cache_path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&self.cache_path, serde_json::to_string(entry)?)?;
            Ok(())
        })();
        if let Err(err) = res {
            eprintln!(
                "Could not persist rate cache to {}: {err:#}",
                self.cache_path.display()
            );
        }
    }
}

pub fn default_cache_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("io.feewise", "Feewise", "feewise")
        .context("Could not determine platform-specific cache dir")?;
    Ok(proj.cache_dir().join("rates.json"))
}

/// Approximate EUR anchors used when the rate source is unreachable or returns
/// garbage. Only there to keep conversion alive during an outage.
pub fn fallback_anchors() -> HashMap<Currency, Decimal> {
    Currency::ALL
        .iter()
        .map(|c| (*c, c.profile().fallback_rate))
        .collect()
}

fn validate_anchors(anchors: HashMap<Currency, Decimal>) -> Result<HashMap<Currency, Decimal>> {
    for c in Currency::ALL {
        let rate = anchors
            .get(&c)
            .with_context(|| format!("Missing anchor rate for {}", c.code()))?;
        if *rate <= Decimal::ZERO {
            anyhow::bail!("Non-positive anchor rate {} for {}", rate, c.code());
        }
    }
    Ok(anchors)
}

/// Expand base-currency anchors into the full pairwise table:
/// `rate[from][to] = anchor[to] / anchor[from]`, self-rate 1.
fn derive_tables(anchors: &HashMap<Currency, Decimal>) -> RatesTable {
    let mut tables = RatesTable::new();
    for from in Currency::ALL {
        let from_anchor = anchors[&from];
        let mut row = HashMap::new();
        for to in Currency::ALL {
            let rate = if from == to {
                Decimal::ONE
            } else {
                anchors[&to] / from_anchor
            };
            row.insert(to, rate);
        }
        tables.insert(from, row);
    }
    tables
}
