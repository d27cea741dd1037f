use tracing::error;

use crate::errors::RetailerError;

/// Is capable of parsing the following into total cents:
/// 1. "$123.12"
/// 2. "123.12"
/// 3. "1,234.56"
/// 4. "100" (no cents)
/// 5. "1.5" (single cent digit, 150 cents)
pub(crate) fn price_to_cents(price: &str) -> Result<u64, RetailerError> {
    let mut trimmed_price = price.trim().replace(",", "");

    if trimmed_price.starts_with("$") {
        trimmed_price.remove(0);
    }

    // lazily deal with missing cents
    // turns "100" -> "100.00"
    if !trimmed_price.contains(".") {
        trimmed_price += ".00";
    }

    match trimmed_price.split_once(".") {
        Some((dollars, cents)) => {
            let padded_cents = format!("{cents:0<2}");

            if padded_cents.len() != 2 {
                error!("Too many cent digits in {}", price);
                return Err(RetailerError::InvalidNumber(price.into()));
            }

            let parsed_dollars = string_to_u64(dollars)?;
            let parsed_cents = string_to_u64(&padded_cents)?;

            let Some(total) = parsed_dollars
                .checked_mul(100)
                .and_then(|cents| cents.checked_add(parsed_cents))
            else {
                error!("Price does not fit in cents: {}", price);
                return Err(RetailerError::InvalidNumber(price.into()));
            };

            Ok(total)
        }
        None => {
            error!("Failed to parse price, missing divider: {}", price);
            Err(RetailerError::InvalidNumber(price.into()))
        }
    }
}

pub(crate) fn string_to_u64(string: &str) -> Result<u64, RetailerError> {
    if string.is_empty() || !string.chars().all(|c| c.is_ascii_digit()) {
        error!("Failed to parse string into u64 {}", string);
        return Err(RetailerError::InvalidNumber(string.into()));
    }

    string
        .parse::<u64>()
        .map_err(|_| RetailerError::InvalidNumber(string.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_price_layouts() {
        assert_eq!(price_to_cents("$123.12").unwrap(), 12_312);
        assert_eq!(price_to_cents("123.12").unwrap(), 12_312);
        assert_eq!(price_to_cents("1,234.56").unwrap(), 123_456);
        assert_eq!(price_to_cents(" 100 ").unwrap(), 10_000);
    }

    #[test]
    fn single_cent_digit_is_tens_of_cents() {
        assert_eq!(price_to_cents("1.5").unwrap(), 150);
    }

    #[test]
    fn rejects_garbage() {
        assert!(price_to_cents("").is_err());
        assert!(price_to_cents("abc").is_err());
        assert!(price_to_cents("1.234").is_err());
        assert!(price_to_cents("-5.00").is_err());
        assert!(price_to_cents("+5.00").is_err());
    }

    #[test]
    fn rejects_prices_that_overflow() {
        assert!(price_to_cents("999999999999999999").is_err());
        assert!(price_to_cents("184467440737095516.16").is_err());
        assert_eq!(
            price_to_cents("184467440737095516.15").unwrap(),
            u64::MAX
        );
    }
}
