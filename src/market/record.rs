use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One record as the feed returns it. Prices arrive as strings or numbers.
///
/// Text fields that are null or not strings read as `None`, so one malformed
/// row never rejects the whole body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPriceRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub market: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub commodity: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub variety: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub min_price: Option<Value>,
    #[serde(default)]
    pub max_price: Option<Value>,
    #[serde(default)]
    pub modal_price: Option<Value>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Top-level feed payload. A body without `records` is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub records: Vec<RawPriceRecord>,
}

/// A cleaned price record with a positive modal price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub state: Option<String>,
    pub district: Option<String>,
    pub market: String,
    pub commodity: String,
    pub variety: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub modal_price: i64,
}

impl PriceRecord {
    /// `None` when the commodity is missing or blank, or the modal price is
    /// missing, non-numeric or not positive.
    pub fn from_raw(raw: RawPriceRecord) -> Option<Self> {
        let commodity = raw.commodity.filter(|c| !c.trim().is_empty())?;
        let modal_price = raw.modal_price.as_ref().and_then(parse_price)?;
        if modal_price <= 0 {
            return None;
        }

        Some(Self {
            arrival_date: raw.arrival_date.as_deref().and_then(parse_arrival_date),
            min_price: raw.min_price.as_ref().and_then(parse_price),
            max_price: raw.max_price.as_ref().and_then(parse_price),
            state: raw.state,
            district: raw.district,
            market: raw.market.unwrap_or_default(),
            commodity,
            variety: raw.variety,
            modal_price,
        })
    }
}

/// Drop every record without a commodity or a usable modal price, keeping
/// feed order.
pub fn clean_records(raw: Vec<RawPriceRecord>) -> Vec<PriceRecord> {
    raw.into_iter().filter_map(PriceRecord::from_raw).collect()
}

/// Integer price from a feed value, read the way `parseInt(value, 10)` reads it:
/// leading whitespace, an optional sign, then as many digits as are present.
pub fn parse_price(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => parse_int_prefix(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                let f = n.as_f64()?;
                (f.is_finite() && f.abs() < 1e18).then(|| f.trunc() as i64)
            }
        }
        _ => None,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Arrival dates are `dd/mm/yyyy` in the feed.
fn parse_arrival_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}
