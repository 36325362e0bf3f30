// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for the upstream endpoints and the derived-image
//! size convention, so views, the HTTP client, and tests agree on them.

/// Listing endpoint returning a JSON array of photo metadata records.
pub const DEFAULT_LIST_ENDPOINT: &str = "https://picsum.photos/v2/list";

/// Base of the templated image endpoint, `{base}/id/{id}/{w}/{h}`.
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://picsum.photos";

/// Square crop size requested for grid tiles.
pub const THUMBNAIL_SIZE: u32 = 400;

/// Square crop size requested for the detail overlay.
pub const DETAIL_SIZE: u32 = 800;

/// How many overlay images are kept around after dismissal, so reopening a
/// recently viewed record does not refetch it.
pub const DETAIL_CACHE_CAPACITY: usize = 16;
