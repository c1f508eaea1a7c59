// SPDX-License-Identifier: MPL-2.0
//! HTTP retrieval and parsing of the service catalog.
//!
//! The transport layer owns retries and timeouts (none are added here); this
//! module only classifies failures into the two user-visible categories and
//! logs the raw detail for diagnostics.

use super::ServiceItem;
use crate::error::FetchError;

/// Fixed resource path appended to the configured base URL.
pub const SERVICES_PATH: &str = "/api/services";

/// Fetches the catalog from `{base_url}/api/services`.
///
/// # Errors
///
/// Returns [`FetchError::Transport`] when the endpoint cannot be reached or
/// answers with a non-success status, and [`FetchError::Format`] when a body
/// arrives that is not a JSON array.
pub async fn fetch_services(base_url: &str) -> Result<Vec<ServiceItem>, FetchError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), SERVICES_PATH);

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent("ServiceDeck/0.1.0")
        .build()
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let response = client.get(&url).send().await.map_err(|err| {
        eprintln!("Error fetching services: {err}");
        FetchError::Transport(err.to_string())
    })?;

    if !response.status().is_success() {
        let status = response.status();
        eprintln!("Error fetching services: HTTP status {status}");
        return Err(FetchError::Transport(format!("HTTP status: {status}")));
    }

    let body = response.text().await.map_err(|err| {
        eprintln!("Error fetching services: {err}");
        FetchError::Transport(err.to_string())
    })?;

    parse_services(&body)
}

/// Parses a response body into the item list.
///
/// Any body that is not a JSON array is a format error: an object, a scalar,
/// `null`, or non-JSON text. A malformed array never yields a partial result;
/// item objects themselves are read leniently, with missing fields
/// defaulting to empty strings.
pub fn parse_services(body: &str) -> Result<Vec<ServiceItem>, FetchError> {
    let payload: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            eprintln!("API response is not an array: {body}");
            return Err(FetchError::Format(body.to_string()));
        }
    };

    let serde_json::Value::Array(entries) = payload else {
        eprintln!("API response is not an array: {payload}");
        return Err(FetchError::Format(payload.to_string()));
    };

    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value(entry.clone()).map_err(|_| {
                eprintln!("API response entry is not an object: {entry}");
                FetchError::Format(entry.to_string())
            })
        })
        .collect()
}
