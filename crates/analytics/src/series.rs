use chrono::NaiveDate;
use core_types::DailyObservation;

/// Column view over a set of observations, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSeries {
    pub dates: Vec<NaiveDate>,
    pub sugar_close: Vec<f64>,
    pub usd_cny_rate: Vec<f64>,
    pub bdi_index: Vec<f64>,
    pub import_cost: Vec<f64>,
}

impl ObservationSeries {
    /// Splits observations into columns, sorted by `record_date` ascending
    /// regardless of input order.
    pub fn from_observations(observations: &[DailyObservation]) -> Self {
        let mut ordered: Vec<&DailyObservation> = observations.iter().collect();
        ordered.sort_by_key(|obs| obs.record_date);

        let mut series = Self {
            dates: Vec::with_capacity(ordered.len()),
            sugar_close: Vec::with_capacity(ordered.len()),
            usd_cny_rate: Vec::with_capacity(ordered.len()),
            bdi_index: Vec::with_capacity(ordered.len()),
            import_cost: Vec::with_capacity(ordered.len()),
        };
        for obs in ordered {
            series.dates.push(obs.record_date);
            series.sugar_close.push(obs.sugar_close);
            series.usd_cny_rate.push(obs.usd_cny_rate);
            series.bdi_index.push(obs.bdi_index);
            series.import_cost.push(obs.import_cost_estimate);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// The observation with the most recent `record_date`.
pub fn latest(observations: &[DailyObservation]) -> Option<&DailyObservation> {
    observations.iter().max_by_key(|obs| obs.record_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(day: u32, sugar: f64) -> DailyObservation {
        DailyObservation {
            record_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            sugar_close: sugar,
            usd_cny_rate: 7.2,
            bdi_index: 1800.0,
            import_cost_estimate: 6000.0,
        }
    }

    #[test]
    fn newest_first_input_is_reversed() {
        let series = ObservationSeries::from_observations(&[obs(3, 30.0), obs(2, 20.0), obs(1, 10.0)]);
        assert_eq!(series.sugar_close, vec![10.0, 20.0, 30.0]);
        assert_eq!(series.dates[0], NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn latest_ignores_input_order() {
        let observations = [obs(2, 20.0), obs(9, 90.0), obs(5, 50.0)];
        assert_eq!(latest(&observations).map(|o| o.sugar_close), Some(90.0));
        assert!(latest(&[]).is_none());
    }
}
