//! Headline cards for the market overview.

use core_types::{DailyObservation, MetricCard};

const PRICE_SUFFIX: &str = "元/吨";

/// Percent change from `previous` to `latest`.
///
/// `None` when `previous` is zero or not finite.
pub fn percent_change(latest: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 || !previous.is_finite() {
        return None;
    }
    Some((latest - previous) / previous * 100.0)
}

/// Builds the four overview cards.
///
/// `history` is expected newest first, so `history[1]` is the trading day
/// before `latest`.
pub fn build_metric_cards(latest: Option<&DailyObservation>, history: &[DailyObservation]) -> Vec<MetricCard> {
    let Some(latest) = latest else {
        return Vec::new();
    };
    let previous = history.get(1);

    let change = |latest_value: f64, previous_value: Option<f64>| {
        previous_value.and_then(|prev| percent_change(latest_value, prev))
    };

    vec![
        MetricCard {
            title: "郑糖价格".to_string(),
            value: latest.sugar_close,
            suffix: Some(PRICE_SUFFIX.to_string()),
            decimals: None,
            change: change(latest.sugar_close, previous.map(|p| p.sugar_close)),
        },
        MetricCard {
            title: "美元汇率".to_string(),
            value: latest.usd_cny_rate,
            suffix: None,
            decimals: Some(4),
            change: change(latest.usd_cny_rate, previous.map(|p| p.usd_cny_rate)),
        },
        MetricCard {
            title: "BDI指数".to_string(),
            value: latest.bdi_index,
            suffix: None,
            decimals: None,
            change: change(latest.bdi_index, previous.map(|p| p.bdi_index)),
        },
        MetricCard {
            title: "估算进口成本".to_string(),
            value: latest.import_cost_estimate,
            suffix: Some(PRICE_SUFFIX.to_string()),
            decimals: None,
            change: change(latest.import_cost_estimate, previous.map(|p| p.import_cost_estimate)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(day: u32, sugar: f64, usd: f64, bdi: f64, cost: f64) -> DailyObservation {
        DailyObservation {
            record_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            sugar_close: sugar,
            usd_cny_rate: usd,
            bdi_index: bdi,
            import_cost_estimate: cost,
        }
    }

    #[test]
    fn no_latest_means_no_cards() {
        assert!(build_metric_cards(None, &[]).is_empty());
    }

    #[test]
    fn changes_compare_against_second_history_entry() {
        let history = vec![obs(14, 6600.0, 7.2, 1800.0, 6000.0), obs(13, 6000.0, 7.2, 2000.0, 6000.0)];
        let cards = build_metric_cards(history.first(), &history);

        assert_eq!(cards.len(), 4);
        assert!((cards[0].change.unwrap() - 10.0).abs() < 1e-9);
        assert_eq!(cards[1].change, Some(0.0));
        assert_eq!(cards[1].decimals, Some(4));
        assert!((cards[2].change.unwrap() + 10.0).abs() < 1e-9);
        assert_eq!(cards[3].suffix.as_deref(), Some("元/吨"));
    }

    #[test]
    fn single_observation_has_no_change() {
        let history = vec![obs(14, 6600.0, 7.2, 1800.0, 6000.0)];
        let cards = build_metric_cards(history.first(), &history);
        assert!(cards.iter().all(|card| card.change.is_none()));
        assert_eq!(cards[2].value, 1800.0);
    }

    #[test]
    fn zero_previous_is_not_comparable() {
        assert_eq!(percent_change(5.0, 0.0), None);
        assert_eq!(percent_change(5.0, f64::NAN), None);
        assert!((percent_change(110.0, 100.0).unwrap() - 10.0).abs() < 1e-9);
    }
}
