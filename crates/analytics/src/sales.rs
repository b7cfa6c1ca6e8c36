//! Sales group-bys: totals per period, per month label, and seasonality.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use stockdesk_core::DomainError;
use stockdesk_sales::{SaleRecord, month_label};

use crate::summary::mean;

/// Total quantity sold in one period.
///
/// Totals are wider than a single sale's quantity so that summing many
/// large cells cannot wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodTotal {
    pub period: NaiveDate,
    pub quantity: u128,
}

/// Total quantity sold under one `YYYY-MM` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub quantity: u128,
}

/// Least-squares line through the period totals.
///
/// `x` is the period in days since 1970-01-01, so `slope` is units per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// `None` for fewer than two periods.
    pub fn fit(totals: &[PeriodTotal]) -> Option<Self> {
        if totals.len() < 2 {
            return None;
        }
        let xs: Vec<f64> = totals.iter().map(|t| epoch_days(t.period)).collect();
        let ys: Vec<f64> = totals.iter().map(|t| t.quantity as f64).collect();
        let (mean_x, mean_y) = (mean(&xs), mean(&ys));

        let (mut sxx, mut sxy) = (0.0, 0.0);
        for (x, y) in xs.iter().zip(&ys) {
            sxx += (x - mean_x) * (x - mean_x);
            sxy += (x - mean_x) * (y - mean_y);
        }
        if sxx == 0.0 {
            return None;
        }
        let slope = sxy / sxx;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn at(&self, period: NaiveDate) -> f64 {
        self.intercept + self.slope * epoch_days(period)
    }
}

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn epoch_days(period: NaiveDate) -> f64 {
    f64::from(period.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
}

/// Average recorded quantity for one calendar month, across years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seasonality {
    pub month: u32,
    pub quarter: &'static str,
    pub mean_quantity: f64,
}

/// Restrict period-based series to one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u32),
}

impl MonthFilter {
    pub fn matches(self, period: NaiveDate) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => period.month() == m,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = DomainError;

    /// `all` (any case) or a month number `1..=12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        match s.parse::<u32>() {
            Ok(m @ 1..=12) => Ok(MonthFilter::Month(m)),
            _ => Err(DomainError::validation(format!(
                "month filter must be 'all' or 1-12 (got '{s}')"
            ))),
        }
    }
}

impl core::fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => write!(f, "{m}"),
        }
    }
}

/// Financial quarter of a calendar month; the financial year starts in April.
pub fn fiscal_quarter(month: u32) -> &'static str {
    match month {
        1..=3 => "Q4",
        4..=6 => "Q1",
        7..=9 => "Q2",
        _ => "Q3",
    }
}

/// Total quantity per period, ascending.
pub fn sales_trends(sales: &[SaleRecord], filter: MonthFilter) -> Vec<PeriodTotal> {
    let mut totals: BTreeMap<NaiveDate, u128> = BTreeMap::new();
    for sale in sales.iter().filter(|s| filter.matches(s.period)) {
        *totals.entry(sale.period).or_default() += u128::from(sale.units());
    }
    totals
        .into_iter()
        .map(|(period, quantity)| PeriodTotal { period, quantity })
        .collect()
}

/// Total quantity per `YYYY-MM` label, ascending.
pub fn monthly_sales(sales: &[SaleRecord], filter: MonthFilter) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<String, u128> = BTreeMap::new();
    for sale in sales.iter().filter(|s| filter.matches(s.period)) {
        *totals.entry(month_label(sale.period)).or_default() += u128::from(sale.units());
    }
    totals
        .into_iter()
        .map(|(month, quantity)| MonthlyTotal { month, quantity })
        .collect()
}

/// Mean quantity per calendar month over the recorded sales in that month.
///
/// Empty cells are not part of the mean, and months with nothing recorded
/// are omitted. Not affected by the month filter.
pub fn monthly_seasonality(sales: &[SaleRecord]) -> Vec<Seasonality> {
    let mut by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for sale in sales {
        if let Some(quantity) = sale.quantity {
            by_month
                .entry(sale.period.month())
                .or_default()
                .push(quantity as f64);
        }
    }
    by_month
        .into_iter()
        .map(|(month, quantities)| Seasonality {
            month,
            quarter: fiscal_quarter(month),
            mean_quantity: mean(&quantities),
        })
        .collect()
}
