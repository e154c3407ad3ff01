//! Figures shown by the estimate slider.
//!
//! Both multipliers are kept in hundredths so the floor is taken on exact
//! integers instead of on a float product.

/// 0.20 per month.
pub const MONTHLY_HUNDREDTHS: u64 = 20;
/// 8.91 over a year.
pub const ANNUAL_HUNDREDTHS: u64 = 891;

pub fn monthly(amount: u64) -> u64 {
    amount.saturating_mul(MONTHLY_HUNDREDTHS) / 100
}

pub fn annual(amount: u64) -> u64 {
    amount.saturating_mul(ANNUAL_HUNDREDTHS) / 100
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Estimate {
    pub amount: u64,
    pub monthly: u64,
    pub annual: u64,
}

impl Estimate {
    pub fn for_amount(amount: u64) -> Self {
        Self {
            amount,
            monthly: monthly(amount),
            annual: annual(amount),
        }
    }

    /// Reads a slider value. Anything that is not a non-negative integer yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u64>().ok().map(Self::for_amount)
    }
}

/// Which copy of the widget is being wired. Each one has its own element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn range_id(self) -> &'static str {
        match self {
            Layout::Desktop => "investment-range",
            Layout::Mobile => "investment-range-mobile",
        }
    }

    pub fn amount_id(self) -> &'static str {
        match self {
            Layout::Desktop => "investment-val",
            Layout::Mobile => "investment-val-mobile",
        }
    }

    pub fn monthly_id(self) -> &'static str {
        match self {
            Layout::Desktop => "roi-val",
            Layout::Mobile => "roi-val-mobile",
        }
    }

    pub fn annual_id(self) -> &'static str {
        match self {
            Layout::Desktop => "roi-total",
            Layout::Mobile => "roi-annual-mobile",
        }
    }
}
