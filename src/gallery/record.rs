// SPDX-License-Identifier: MPL-2.0
//! Photo metadata as returned by the listing endpoint.

use serde::Deserialize;

/// One entry of the listing response, taken verbatim from the upstream API.
///
/// Records are never mutated after deserialization; the whole collection is
/// replaced on every successful fetch. `id` doubles as the render key and as
/// the path segment of derived image URLs. The upstream service is assumed to
/// return unique ids per batch; duplicates are not filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub download_url: String,
}

impl PhotoRecord {
    /// Formats the original dimensions the way the detail overlay shows them.
    #[must_use]
    pub fn dimensions(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}
