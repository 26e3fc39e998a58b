pub mod currencies;
pub mod rates;
