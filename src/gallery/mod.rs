// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the photo metadata model and the HTTP client that
//! fetches the listing and derived images.

pub mod client;
pub mod record;

pub use client::GalleryClient;
pub use record::PhotoRecord;
