use crate::domain::model::Money;
use crate::utils::error::{MenuError, Result};
use url::Url;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 200;
/// Exclusive upper bound on a dish price.
pub const PRICE_LIMIT: Money = Money::from_cents(10_000);

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MenuError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks a required dish field and returns it trimmed.
pub fn required_field<'a>(field_name: &str, value: &'a str, max_chars: usize) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MenuError::validation(field_name, "Please fill in all fields"));
    }

    let length = trimmed.chars().count();
    if length > max_chars {
        return Err(MenuError::validation(
            field_name,
            format!(
                "The {} can be at most {} characters (got {})",
                field_name, max_chars, length
            ),
        ));
    }
    Ok(trimmed)
}

/// Parses a dish price, requiring 0 < price < 100 both as entered and after rounding to cents.
pub fn parse_price(input: &str) -> Result<Money> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MenuError::validation("price", "Please fill in all fields"));
    }

    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            return Err(MenuError::validation(
                "price",
                "Please enter a valid price greater than 0",
            ))
        }
    };

    if value >= PRICE_LIMIT.cents() as f64 / 100.0 {
        return Err(MenuError::validation("price", "Price must be less than $100"));
    }

    match Money::from_decimal_str(trimmed) {
        Some(price) if price == Money::ZERO => Err(MenuError::validation(
            "price",
            "Please enter a valid price greater than 0",
        )),
        Some(price) if price >= PRICE_LIMIT => {
            Err(MenuError::validation("price", "Price must be less than $100"))
        }
        Some(price) => Ok(price),
        None => Err(MenuError::validation(
            "price",
            "Please enter a valid price greater than 0",
        )),
    }
}
