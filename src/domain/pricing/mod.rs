pub mod calculator;
pub mod dto;
pub mod error;
pub mod format;

pub use calculator::{
    calculate_price, calculate_price_from_names, parse_delivery_days, parse_meal_types,
    weeks_per_month, PriceSelection,
};
pub use dto::{CalculatePriceResponse, PriceBreakdown, PriceQuote, QuoteSource};
pub use error::PricingError;
pub use format::format_idr;
