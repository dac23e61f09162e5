// ABOUTME: Heatmap colour stops and glow parameters for the regional recipe map
// ABOUTME: Fixed RGB triples for the no-data colour and the three-stop ramp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

/// Colour for regions with no recipes (zinc-800)
pub const NO_DATA_RGB: (u8, u8, u8) = (39, 39, 42);

/// Ramp start at t = 0 (zinc-700)
pub const STOP_LOW_RGB: (u8, u8, u8) = (63, 63, 70);

/// Ramp midpoint at t = 0.5 (coral, rose-400)
pub const STOP_MID_RGB: (u8, u8, u8) = (251, 113, 133);

/// Ramp end at t = 1 (rose-600)
pub const STOP_HIGH_RGB: (u8, u8, u8) = (225, 29, 72);

/// Position of the middle stop on the normalized scale
pub const MID_STOP_POSITION: f64 = 0.5;

/// Glow for the smallest non-zero count
pub const MIN_GLOW: f64 = 0.3;

/// Glow added between the smallest non-zero count and `max_count`
pub const GLOW_RANGE: f64 = 0.7;
