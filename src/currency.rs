use std::fmt;

pub const EMERALD_TO_COIN_RATE: u64 = 4;
pub const GOLD_IN_COINS: u64 = 64;
pub const IRON_IN_COINS: u64 = 16;
pub const COPPER_IN_COINS: u64 = 4;

/// Conversion rates, all expressed in the finest unit (coin).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyRates {
    pub emerald_to_coin: u64,
    pub gold: u64,
    pub iron: u64,
    pub copper: u64,
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            emerald_to_coin: EMERALD_TO_COIN_RATE,
            gold: GOLD_IN_COINS,
            iron: IRON_IN_COINS,
            copper: COPPER_IN_COINS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoinBreakdown {
    pub gold: u64,
    pub iron: u64,
    pub copper: u64,
    pub coin: u64,
}

impl CurrencyRates {
    /// Splits `total_coins` into tiers, largest first. The remainder of each tier feeds the next one.
    pub fn decompose(&self, total_coins: u64) -> CoinBreakdown {
        let gold = total_coins / self.gold;
        let remainder = total_coins % self.gold;
        let iron = remainder / self.iron;
        let remainder = remainder % self.iron;
        let copper = remainder / self.copper;
        let coin = remainder % self.copper;

        CoinBreakdown { gold, iron, copper, coin }
    }

    pub fn total(&self, breakdown: &CoinBreakdown) -> u64 {
        breakdown.gold * self.gold + breakdown.iron * self.iron + breakdown.copper * self.copper + breakdown.coin
    }

    pub fn emeralds_to_coins(&self, emeralds: u64) -> Option<u64> {
        emeralds.checked_mul(self.emerald_to_coin)
    }
}

impl fmt::Display for CoinBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g {}i {}cu {}c", self.gold, self.iron, self.copper, self.coin)
    }
}
