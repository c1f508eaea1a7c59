// SPDX-License-Identifier: MPL-2.0
//! Catalog domain: service items and the fetch lifecycle state.
//!
//! The application issues a single request at startup; [`CatalogState`] owns
//! the resulting three-state lifecycle and the request identifier used to
//! discard stale completions.

pub mod fetch;

use crate::error::FetchError;
use serde::Deserialize;

/// One service offering as returned by the catalog API.
///
/// The API is lenient: items are plain JSON objects and absent fields render
/// as empty strings rather than rejecting the whole payload. The identifier
/// is externally assigned and arrives as either `id` or `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceItem {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Lifecycle of the startup catalog request. Exactly one variant is active at
/// any time; `Loaded` and `Failed` are terminal for the process lifetime
/// since no refetch trigger exists.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Request in flight; the page shows a spinner.
    Loading,

    /// Response parsed as an ordered sequence; items keep payload order.
    Loaded(Vec<ServiceItem>),

    /// Transport or format failure; holds the user-facing message.
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn items(&self) -> Option<&[ServiceItem]> {
        match self {
            FetchState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Catalog state owned by the application root.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub fetch: FetchState,

    /// Identifier of the request whose completion is still welcome. A
    /// completion carrying any other id is stale and must be discarded.
    pub request_id: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            fetch: FetchState::Loading,
            request_id: 0,
        }
    }
}

impl CatalogState {
    /// Marks the outstanding request as abandoned so a late completion cannot
    /// mutate state that no longer expects it.
    pub fn cancel(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
    }

    /// Applies a completed fetch if it matches the outstanding request.
    /// Returns whether the result was applied.
    pub fn apply(
        &mut self,
        request_id: u64,
        result: Result<Vec<ServiceItem>, FetchError>,
    ) -> bool {
        if request_id != self.request_id {
            return false;
        }

        self.fetch = match result {
            Ok(items) => FetchState::Loaded(items),
            Err(err) => FetchState::Failed(err.user_message().to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<ServiceItem> {
        vec![
            ServiceItem {
                id: "a".to_string(),
                title: "SAP Consulting".to_string(),
                description: "ERP rollouts".to_string(),
            },
            ServiceItem {
                id: "b".to_string(),
                title: "Cloud Migration".to_string(),
                description: "Lift and shift".to_string(),
            },
        ]
    }

    #[test]
    fn default_state_is_loading() {
        let state = CatalogState::default();
        assert!(state.fetch.is_loading());
        assert!(state.fetch.items().is_none());
        assert!(state.fetch.error().is_none());
    }

    #[test]
    fn apply_ok_transitions_to_loaded_preserving_order() {
        let mut state = CatalogState::default();
        let applied = state.apply(0, Ok(sample_items()));

        assert!(applied);
        assert!(!state.fetch.is_loading());
        let items = state.fetch.items().expect("items should be present");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].id, "b");
    }

    #[test]
    fn apply_transport_error_transitions_to_failed() {
        let mut state = CatalogState::default();
        let applied = state.apply(0, Err(FetchError::Transport("refused".to_string())));

        assert!(applied);
        assert_eq!(
            state.fetch.error(),
            Some("Failed to load services. Please try again later.")
        );
    }

    #[test]
    fn apply_format_error_transitions_to_failed() {
        let mut state = CatalogState::default();
        let applied = state.apply(0, Err(FetchError::Format("not an array".to_string())));

        assert!(applied);
        assert_eq!(state.fetch.error(), Some("Invalid data format."));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = CatalogState::default();
        state.cancel();

        let applied = state.apply(0, Ok(sample_items()));

        assert!(!applied);
        assert!(state.fetch.is_loading());
    }

    #[test]
    fn cancel_bumps_request_id() {
        let mut state = CatalogState::default();
        let before = state.request_id;
        state.cancel();
        assert_ne!(state.request_id, before);
    }

    #[test]
    fn exactly_one_variant_is_observable() {
        let mut state = CatalogState::default();
        assert!(state.fetch.is_loading());

        let _ = state.apply(0, Ok(Vec::new()));

        assert!(!state.fetch.is_loading());
        assert!(state.fetch.error().is_none());
        assert_eq!(state.fetch.items(), Some(&[][..]));
    }
}
