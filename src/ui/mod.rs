// SPDX-License-Identifier: MPL-2.0
//! UI layer: the gallery screen state container, the grid and overlay views,
//! theming, and shared design tokens / widget styles.

pub mod design_tokens;
pub mod grid;
pub mod overlay;
pub mod state;
pub mod styles;
pub mod theme;
