//! Annualized salary normalization.
//!
//! Job boards report pay per year, per month or per hour. Everything is
//! converted to whole thousands per year and rendered as a short string such
//! as `$100k - $150k`.

/// Working hours assumed per year when annualizing hourly pay.
///
/// A flat approximation; it is not adjusted per country or job type.
pub const HOURS_PER_YEAR: f64 = 2000.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Pay period attached to a scraped salary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayInterval {
    #[default]
    Yearly,
    Monthly,
    Hourly,
    /// Any period we do not convert (weekly, daily, ...). Treated as yearly.
    Other,
}

impl PayInterval {
    pub fn parse(interval: &str) -> Self {
        match interval.trim().to_ascii_lowercase().as_str() {
            "yearly" => PayInterval::Yearly,
            "monthly" => PayInterval::Monthly,
            "hourly" => PayInterval::Hourly,
            _ => PayInterval::Other,
        }
    }
}

/// Converts one amount to whole thousands per year, truncating toward zero.
pub fn annualize_thousands(amount: f64, interval: PayInterval) -> i64 {
    let annual = match interval {
        PayInterval::Yearly | PayInterval::Other => amount,
        PayInterval::Monthly => amount * MONTHS_PER_YEAR,
        PayInterval::Hourly => amount * HOURS_PER_YEAR,
    };
    (annual / 1000.0).trunc() as i64
}

/// Renders annualized thousands as a display string.
///
/// A value of `0` is indistinguishable from a missing one: `$0k` is never
/// produced.
pub fn format_salary(min_k: Option<i64>, max_k: Option<i64>) -> Option<String> {
    let min_k = min_k.filter(|k| *k != 0);
    let max_k = max_k.filter(|k| *k != 0);

    match (min_k, max_k) {
        (Some(low), Some(high)) if low == high => Some(format!("${low}k")),
        (Some(low), Some(high)) => Some(format!("${low}k - ${high}k")),
        (Some(low), None) => Some(format!("${low}k+")),
        (None, Some(high)) => Some(format!("Up to ${high}k")),
        (None, None) => None,
    }
}

pub fn normalize_salary(
    min_amount: Option<f64>,
    max_amount: Option<f64>,
    interval: PayInterval,
) -> Option<String> {
    let min_k = min_amount.map(|amount| annualize_thousands(amount, interval));
    let max_k = max_amount.map(|amount| annualize_thousands(amount, interval));
    format_salary(min_k, max_k)
}
