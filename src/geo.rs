/// Best-effort IP geolocation lookup
///
/// One GET against a JSON endpoint that reports the caller's country in a
/// `country_code` field. No retry; the caller treats every error as
/// "keep the default language".

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::GeoError;

#[derive(Debug, Deserialize)]
struct GeoResponse {
    country_code: Option<String>,
}

/// Build the shared HTTP client used for the lookup and image fetches
pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Fetch the caller's two-letter country code
pub async fn lookup_country(client: Client, endpoint: String) -> Result<String, GeoError> {
    debug!(%endpoint, "looking up country");
    let response = client.get(&endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GeoError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    parse_country(&body)
}

fn parse_country(body: &[u8]) -> Result<String, GeoError> {
    let parsed: GeoResponse = serde_json::from_slice(body)?;
    parsed
        .country_code
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
        .ok_or(GeoError::MissingCountry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country_code() {
        let body = br#"{"ip":"1.2.3.4","country_code":"us","country_name":"United States"}"#;
        assert_eq!(parse_country(body).unwrap(), "US");
    }

    #[test]
    fn test_missing_or_empty_country() {
        assert!(matches!(parse_country(br#"{"ip":"1.2.3.4"}"#), Err(GeoError::MissingCountry)));
        assert!(matches!(parse_country(br#"{"country_code":""}"#), Err(GeoError::MissingCountry)));
        assert!(matches!(parse_country(br#"{"country_code":null}"#), Err(GeoError::MissingCountry)));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse_country(b"<html>rate limited</html>"), Err(GeoError::Decode(_))));
    }
}
