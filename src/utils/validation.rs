use crate::utils::error::{ReadingError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReadingError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReadingError::validation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReadingError::validation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(ReadingError::validation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

/// The original form's date picker bottoms out at 1940-01-01.
pub fn validate_birth_date(field_name: &str, date: NaiveDate) -> Result<()> {
    let min = NaiveDate::from_ymd_opt(1940, 1, 1).unwrap();
    if date < min {
        return Err(ReadingError::validation(
            field_name,
            format!("Birth date must not be earlier than {}", min),
        ));
    }
    Ok(())
}
