use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::market::feed::{MarketError, PriceQuery, PriceSource};
use crate::market::record::{clean_records, PriceRecord, RawPriceRecord};

/// The only failure text a user ever sees.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch market data. Please check your network or API key.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    PriceDesc,
    PriceAsc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PriceDesc => "price_desc",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::NameAsc => "name_asc",
            SortOrder::NameDesc => "name_desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to the default order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price_asc" => SortOrder::PriceAsc,
            "name_asc" => SortOrder::NameAsc,
            "name_desc" => SortOrder::NameDesc,
            _ => SortOrder::PriceDesc,
        })
    }
}

/// Identifies one outstanding fetch. Only the newest ticket may complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    query: PriceQuery,
}

impl RequestTicket {
    pub fn query(&self) -> &PriceQuery {
        &self.query
    }
}

/// Market panel state: the active query, its cleaned records, and whether a
/// fetch is in flight or failed.
#[derive(Debug, Default)]
pub struct MarketBoard {
    query: Option<PriceQuery>,
    generation: u64,
    loading: bool,
    records: Vec<PriceRecord>,
    error: Option<&'static str>,
}

impl MarketBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `query`. Any earlier outstanding ticket becomes stale.
    /// Returns `None`, leaving the board untouched, when no state is selected.
    pub fn begin(&mut self, query: PriceQuery) -> Option<RequestTicket> {
        if !query.is_ready() {
            return None;
        }

        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.query = Some(query.clone());

        debug!(generation = self.generation, state = %query.state, "market fetch started");

        Some(RequestTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply a fetch result. Returns `false` and changes nothing when a newer
    /// request has been started since `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<RawPriceRecord>, MarketError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "ignoring stale market response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(raw) => {
                let total = raw.len();
                self.records = clean_records(raw);
                debug!(total, kept = self.records.len(), "market records cleaned");
            }
            Err(err) => {
                warn!(error = %err, "market fetch failed");
                self.records.clear();
                self.error = Some(FETCH_FAILED_MESSAGE);
            }
        }
        true
    }

    /// `begin`, fetch from `source`, then `complete`.
    pub async fn refresh<S>(&mut self, source: &S, query: PriceQuery) -> bool
    where
        S: PriceSource + ?Sized,
    {
        let Some(ticket) = self.begin(query) else {
            return false;
        };
        let result = source.fetch(ticket.query()).await;
        self.complete(ticket, result)
    }

    pub fn query(&self) -> Option<&PriceQuery> {
        self.query.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Cleaned records in feed order.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    /// One row per commodity, sorted by `order`.
    pub fn rows(&self, order: SortOrder) -> Vec<&PriceRecord> {
        let mut rows = unique_by_commodity(&self.records);
        sort_rows(&mut rows, order);
        rows
    }
}

/// The last record of each commodity wins, at the position where the
/// commodity first appeared.
pub fn unique_by_commodity(records: &[PriceRecord]) -> Vec<&PriceRecord> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<&PriceRecord> = Vec::new();

    for record in records {
        match slots.get(record.commodity.as_str()) {
            Some(&slot) => rows[slot] = record,
            None => {
                slots.insert(record.commodity.as_str(), rows.len());
                rows.push(record);
            }
        }
    }
    rows
}

pub fn sort_rows(rows: &mut [&PriceRecord], order: SortOrder) {
    match order {
        SortOrder::PriceDesc => rows.sort_by(|a, b| b.modal_price.cmp(&a.modal_price)),
        SortOrder::PriceAsc => rows.sort_by(|a, b| a.modal_price.cmp(&b.modal_price)),
        SortOrder::NameAsc => rows.sort_by(|a, b| compare_names(&a.commodity, &b.commodity)),
        SortOrder::NameDesc => rows.sort_by(|a, b| compare_names(&b.commodity, &a.commodity)),
    }
}

// Case-insensitive first, exact spelling as the tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
