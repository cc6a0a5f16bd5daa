mod quote;

pub use quote::RateQuote;
