//! Search paging cursor.

use serde::Serialize;
use serde_json::Value;

/// Paging fields returned by search endpoints.
///
/// Missing or `null` fields read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    /// Offset of the returned page.
    pub offset: u64,

    /// Page size echoed by the API.
    pub limit: u64,

    /// Offset of the next page (0 when there is none).
    pub next: u64,

    /// Total number of matches.
    pub total: u64,
}

impl PageState {
    /// Read the paging fields from a search response body.
    #[must_use]
    pub fn from_response(body: &Value) -> Self {
        let read = |field: &str| body.get(field).and_then(Value::as_u64).unwrap_or(0);
        Self { offset: read("offset"), limit: read("limit"), next: read("next"), total: read("total") }
    }

    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next > 0
    }
}
