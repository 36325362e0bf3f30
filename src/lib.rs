// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery browser built with the Iced GUI framework.
//!
//! It fetches photo metadata from the public picsum.photos listing endpoint,
//! renders the batch as a two-column tiled grid, and shows a modal detail
//! overlay for the selected record. The screen is parameterized by a theme
//! (palette, copy, animation toggle) instead of being duplicated per look.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod ui;
