use serde::{Deserialize, Serialize};

/// One source's MXN/USD quote.
///
/// `value` and `source_date` are set together or not at all: a source that
/// could not be read is represented by [`RateQuote::unavailable`], never by a
/// partially filled quote. The date stays in whatever format the source
/// publishes; it is not normalized across sources.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Quoted rate in MXN per USD, `0.0` when the source was unavailable.
    pub value: f64,

    /// The source's own date string, `None` when the source was unavailable.
    /// Serialized as an explicit `null` so callers can always find the key.
    pub source_date: Option<String>,
}

impl RateQuote {
    /// Create a populated quote.
    pub fn new(value: f64, source_date: impl Into<String>) -> Self {
        Self {
            value,
            source_date: Some(source_date.into()),
        }
    }

    /// The fallback quote for a source that could not be read or parsed.
    pub fn unavailable() -> Self {
        Self {
            value: 0.0,
            source_date: None,
        }
    }

    /// True when this quote is the unavailable fallback.
    pub fn is_unavailable(&self) -> bool {
        self.source_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_new() {
        let quote = RateQuote::new(20.20, "09/09/2020");
        assert_eq!(quote.value, 20.20);
        assert_eq!(quote.source_date.as_deref(), Some("09/09/2020"));
        assert!(!quote.is_unavailable());
    }

    #[test]
    fn test_unavailable_pairs_zero_with_no_date() {
        let quote = RateQuote::unavailable();
        assert_eq!(quote.value, 0.0);
        assert!(quote.source_date.is_none());
        assert!(quote.is_unavailable());
    }

    #[test]
    fn test_unavailable_serializes_with_null_date() {
        let json = serde_json::to_value(RateQuote::unavailable()).unwrap();
        assert_eq!(json["value"], 0.0);
        assert!(json["source_date"].is_null());
        // the key itself must be present on the wire
        assert!(json.as_object().unwrap().contains_key("source_date"));
    }

    #[test]
    fn test_populated_serializes_date_as_string() {
        let json = serde_json::to_value(RateQuote::new(19.87, "2020-09-10")).unwrap();
        assert_eq!(json["value"], 19.87);
        assert_eq!(json["source_date"], "2020-09-10");
    }
}
