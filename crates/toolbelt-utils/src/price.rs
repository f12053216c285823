//! Price formatting

/// Currency symbol used when callers have no preference.
pub const DEFAULT_CURRENCY: &str = "€";

/// Display a number as a price: currency symbol followed by two decimal places.
///
/// ```
/// use toolbelt_utils::as_price;
///
/// assert_eq!(as_price(19.99, "$"), "$19.99");
/// assert_eq!(as_price(5.0, "€"), "€5.00");
/// ```
pub fn as_price(amount: f64, currency: &str) -> String {
    format!("{currency}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_places() {
        assert_eq!(as_price(3.0, DEFAULT_CURRENCY), "€3.00");
        assert_eq!(as_price(3.14159, DEFAULT_CURRENCY), "€3.14");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(as_price(-2.5, "£"), "£-2.50");
    }

    #[test]
    fn test_empty_currency() {
        assert_eq!(as_price(10.0, ""), "10.00");
    }
}
