use omnyom_schedule::Period;

/// Subscription price per period, in won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    pub one_week: u64,
    pub two_weeks: u64,
    pub four_weeks: u64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            one_week: 65_940,
            two_weeks: 120_080,
            four_weeks: 244_720,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub period: Period,
    pub price: u64,
    /// Price of one day of meals, rounded to the nearest won
    pub daily_price: u64,
}

impl PriceTable {
    pub fn price(&self, period: Period) -> u64 {
        match period {
            Period::OneWeek => self.one_week,
            Period::TwoWeeks => self.two_weeks,
            Period::FourWeeks => self.four_weeks,
        }
    }

    pub fn quote(&self, period: Period) -> Quote {
        let price = self.price(period);
        let days = period.days() as u64;

        Quote {
            period,
            price,
            daily_price: (price + days / 2) / days,
        }
    }
}
