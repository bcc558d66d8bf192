//! Import arbitrage: domestic price against landed import cost.

use core_types::WindowStatus;
use serde::{Deserialize, Serialize};

/// The arbitrage window for one profit figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageStatus {
    pub status: WindowStatus,
    pub profit: f64,
}

impl ArbitrageStatus {
    pub fn color(&self) -> &'static str {
        match self.status {
            WindowStatus::Open => "#34C759",
            WindowStatus::Closed => "#FF3B30",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.status {
            WindowStatus::Open => "🟢",
            WindowStatus::Closed => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self.status {
            WindowStatus::Open => "窗口开启",
            WindowStatus::Closed => "窗口关闭",
        }
    }
}

/// Counts of profitable and losing days across a profit series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitDistribution {
    pub profitable_days: usize,
    pub loss_days: usize,
    /// Share of profitable days, 0..=100.
    pub profitable_ratio: f64,
}

pub fn arbitrage_profit(domestic_price: f64, import_cost: f64) -> f64 {
    domestic_price - import_cost
}

/// The window is open only for strictly positive profit; break-even is closed.
pub fn arbitrage_status(profit: f64) -> ArbitrageStatus {
    let status = if profit > 0.0 {
        WindowStatus::Open
    } else {
        WindowStatus::Closed
    };
    ArbitrageStatus { status, profit }
}

pub fn summarize_profits(profits: &[f64]) -> ProfitDistribution {
    let profitable_days = profits.iter().filter(|&&p| p > 0.0).count();
    let loss_days = profits.iter().filter(|&&p| p <= 0.0).count();

    let profitable_ratio = if profits.is_empty() {
        0.0
    } else {
        profitable_days as f64 / profits.len() as f64 * 100.0
    };

    ProfitDistribution {
        profitable_days,
        loss_days,
        profitable_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_is_domestic_minus_import() {
        assert_eq!(arbitrage_profit(6500.0, 6200.0), 300.0);
        assert_eq!(arbitrage_profit(6000.0, 6200.0), -200.0);
    }

    #[test]
    fn break_even_is_closed() {
        let status = arbitrage_status(0.0);
        assert_eq!(status.status, WindowStatus::Closed);
        assert_eq!(status.color(), "#FF3B30");
        assert_eq!(status.label(), "窗口关闭");
        assert_eq!(status.icon(), "🔴");
    }

    #[test]
    fn open_window_reports_profit() {
        let status = arbitrage_status(arbitrage_profit(6500.0, 6200.0));
        assert!(status.status.is_open());
        assert_eq!(status.profit, 300.0);
        assert_eq!(status.color(), "#34C759");
        assert_eq!(status.icon(), "🟢");
    }

    #[test]
    fn empty_profits_have_zero_ratio() {
        assert_eq!(summarize_profits(&[]), ProfitDistribution::default());
    }

    #[test]
    fn all_losses() {
        let dist = summarize_profits(&[-1.0, -2.0, 0.0]);
        assert_eq!(dist.profitable_days, 0);
        assert_eq!(dist.loss_days, 3);
        assert_eq!(dist.profitable_ratio, 0.0);
    }
}
