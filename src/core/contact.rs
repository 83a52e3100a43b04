use crate::utils::error::{MenuError, Result};
use url::Url;

pub const DEFAULT_MAPS_URL: &str = "https://maps.google.com/";

/// A request for the host platform to call, mail or locate the restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIntent {
    Phone(String),
    Email(String),
    Map(String),
}

impl ContactIntent {
    pub fn label(&self) -> &'static str {
        match self {
            ContactIntent::Phone(_) => "call",
            ContactIntent::Email(_) => "email",
            ContactIntent::Map(_) => "directions",
        }
    }

    /// Builds the URL the platform opens: `tel:`, `mailto:` or a maps search.
    pub fn to_url(&self, maps_base_url: &str) -> Result<Url> {
        let parsed = match self {
            ContactIntent::Phone(number) => {
                let dialable: String = number.chars().filter(|c| !c.is_whitespace()).collect();
                Url::parse(&format!("tel:{}", dialable))
            }
            ContactIntent::Email(address) => Url::parse(&format!("mailto:{}", address.trim())),
            ContactIntent::Map(address) => Url::parse(maps_base_url).map(|mut url| {
                let query = address
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                url.query_pairs_mut().append_pair("q", &query);
                url
            }),
        };

        parsed.map_err(|e| MenuError::InvalidConfigValueError {
            field: self.label().to_string(),
            value: format!("{:?}", self),
            reason: e.to_string(),
        })
    }
}
