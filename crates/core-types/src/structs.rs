use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One trading day's market snapshot, as delivered by `GET /api/market/daily`.
///
/// The upstream API returns these newest first. Nothing in this crate relies on
/// that ordering; consumers that need it sort by `record_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    #[serde(deserialize_with = "de_record_date")]
    pub record_date: NaiveDate,
    /// Zhengzhou sugar futures close, 元/吨.
    #[serde(deserialize_with = "de_number")]
    pub sugar_close: f64,
    #[serde(deserialize_with = "de_number")]
    pub usd_cny_rate: f64,
    /// Baltic Dry Index.
    #[serde(deserialize_with = "de_number")]
    pub bdi_index: f64,
    /// Upstream estimate of the landed import cost, 元/吨.
    #[serde(deserialize_with = "de_number")]
    pub import_cost_estimate: f64,
}

/// A single headline figure on the market overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub title: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    /// Percent change against the previous observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// Parses a record date as either `YYYY-MM-DD` or a timestamp starting with one
/// followed by `T` and a time (`2024-05-13T00:00:00Z`).
pub fn parse_record_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let invalid = |reason: String| CoreError::InvalidInput("record_date".to_string(), format!("{raw}: {reason}"));

    let trimmed = raw.trim();
    let date_part = match trimmed.split_once('T') {
        Some((date, _time)) => date,
        None => trimmed,
    };
    if date_part.len() != 10 {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| invalid(e.to_string()))
}

fn de_record_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_record_date(&raw).map_err(serde::de::Error::custom)
}

// Backends that store prices as SQL NUMERIC serialise them as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Float(f64),
    Text(String),
}

fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Float(value) => Ok(value),
        RawNumber::Text(text) => text.trim().parse::<f64>().map_err(|e| {
            serde::de::Error::custom(CoreError::InvalidInput(
                "numeric field".to_string(),
                format!("{text}: {e}"),
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_upstream_record() {
        let json = r#"{
            "record_date": "2024-05-13",
            "sugar_close": 6450.0,
            "usd_cny_rate": 7.2301,
            "bdi_index": 1820,
            "import_cost_estimate": "6012.35"
        }"#;

        let obs: DailyObservation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.record_date, NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
        assert_eq!(obs.bdi_index, 1820.0);
        assert!((obs.import_cost_estimate - 6012.35).abs() < 1e-9);
    }

    #[test]
    fn accepts_timestamp_record_date() {
        let date = parse_record_date("2024-05-13T00:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
    }

    #[test]
    fn rejects_malformed_record_date() {
        let err = parse_record_date("13/05/2024").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(field, _) if field == "record_date"));
    }

    #[test]
    fn rejects_trailing_text_after_date() {
        assert!(parse_record_date("2024-05-13garbage").is_err());
        assert!(parse_record_date("2024-05-13 00:00:00").is_err());
        assert!(parse_record_date("2024-5-13").is_err());
    }

    #[test]
    fn rejects_non_numeric_text() {
        let json = r#"{
            "record_date": "2024-05-13",
            "sugar_close": "n/a",
            "usd_cny_rate": 7.2,
            "bdi_index": 1800,
            "import_cost_estimate": 6000
        }"#;
        assert!(serde_json::from_str::<DailyObservation>(json).is_err());
    }

    #[test]
    fn metric_card_omits_absent_fields() {
        let card = MetricCard {
            title: "BDI指数".to_string(),
            value: 1820.0,
            suffix: None,
            decimals: None,
            change: None,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"title":"BDI指数","value":1820.0}"#);
    }
}
