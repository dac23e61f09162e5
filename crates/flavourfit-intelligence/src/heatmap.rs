// ABOUTME: Maps per-state recipe counts to heatmap colours and glow intensities
// ABOUTME: Three-stop linear ramp with a distinct colour for states without recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Heatmap colour mapping
//!
//! A count is normalized to `t = min(count / max_count, 1)`. The colour
//! interpolates low to mid stop for `t < 0.5` and mid to high stop above.
//! Glow grows linearly from 0.3 to 1.0. A zero count gets the no-data
//! colour and no glow.

#![allow(clippy::cast_possible_truncation)] // Safe: channels are clamped to 0..=255
#![allow(clippy::cast_sign_loss)] // Safe: channels are clamped to 0..=255

use flavourfit_core::constants::heatmap::{
    GLOW_RANGE, MID_STOP_POSITION, MIN_GLOW, NO_DATA_RGB, STOP_HIGH_RGB, STOP_LOW_RGB,
    STOP_MID_RGB,
};
use flavourfit_core::models::{RegionCounts, StateCode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a colour from channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other`, rounding each channel
    #[must_use]
    pub fn lerp(self, other: Self, u: f64) -> Self {
        let channel = |a: u8, b: u8| {
            let value = (f64::from(b) - f64::from(a)).mul_add(u, f64::from(a));
            value.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Hex notation, `#rrggbb`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Position of `count` on the normalized `[0, 1]` scale
///
/// `max_count` below 1 is treated as 1.
#[must_use]
pub fn normalized_intensity(count: u32, max_count: u32) -> f64 {
    let max = f64::from(max_count.max(1));
    (f64::from(count) / max).min(1.0)
}

/// Heatmap colour for a state with `count` recipes
#[must_use]
pub fn color_for(count: u32, max_count: u32) -> Rgb {
    if count == 0 {
        return NO_DATA_RGB.into();
    }

    let t = normalized_intensity(count, max_count);
    let (low, mid, high) = (
        Rgb::from(STOP_LOW_RGB),
        Rgb::from(STOP_MID_RGB),
        Rgb::from(STOP_HIGH_RGB),
    );
    if t < MID_STOP_POSITION {
        low.lerp(mid, t / MID_STOP_POSITION)
    } else {
        mid.lerp(high, (t - MID_STOP_POSITION) / (1.0 - MID_STOP_POSITION))
    }
}

/// Glow intensity for a state with `count` recipes
#[must_use]
pub fn glow_for(count: u32, max_count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    GLOW_RANGE.mul_add(normalized_intensity(count, max_count), MIN_GLOW)
}

/// Rendering data for one state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    /// State code
    pub state: StateCode,
    /// State display name, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of recipes
    pub count: u32,
    /// Fill colour
    pub color: Rgb,
    /// Glow intensity in `[0, 1]`
    pub glow: f64,
}

/// Heatmap cells for every state in `counts`, in state-code order
#[must_use]
pub fn build_heatmap(
    counts: &RegionCounts,
    names: &BTreeMap<StateCode, String>,
) -> Vec<HeatmapCell> {
    let max_count = counts.max_count();
    counts
        .iter()
        .map(|(state, count)| HeatmapCell {
            state: state.clone(),
            name: names.get(state).cloned(),
            count,
            color: color_for(count, max_count),
            glow: glow_for(count, max_count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(225, 29, 72).to_string(), "#e11d48");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_lerp_rounds_channels() {
        let c = Rgb::new(0, 0, 0).lerp(Rgb::new(255, 1, 3), 0.5);
        assert_eq!(c, Rgb::new(128, 1, 2));
    }

    #[test]
    fn test_zero_max_is_treated_as_one() {
        assert!((normalized_intensity(1, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_colour_serializes_as_hex() {
        let json = serde_json::to_value(Rgb::new(39, 39, 42)).unwrap();
        assert_eq!(json, serde_json::json!("#27272a"));
    }
}
