// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration.

/// One entry of the size-class distribution.
///
/// Weights are relative; they need not sum to any particular value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleWeight {
    /// Size-class scale in `(0, 1]`.
    pub value: f64,
    /// Relative selection weight.
    pub weight: f64,
}

/// Tunables for grid generation and block sizing.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Side length of each image footprint, in cells.
    pub blocks_per_image: usize,
    /// Target fraction of cells covered by footprints, in `(0, 1)`.
    pub fill_ratio: f64,
    /// On-screen block width, in viewport-height hundredths (vh).
    pub block_width_vh: f64,
    /// On-screen block height, in vh.
    pub block_height_vh: f64,
    /// Size-class distribution sampled per placed image.
    pub scales: Vec<ScaleWeight>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            blocks_per_image: 2,
            fill_ratio: 0.55,
            block_width_vh: 20.0,
            block_height_vh: 20.0,
            scales: vec![
                ScaleWeight {
                    value: 0.75,
                    weight: 0.0,
                },
                ScaleWeight {
                    value: 0.60,
                    weight: 80.0,
                },
                ScaleWeight {
                    value: 0.40,
                    weight: 20.0,
                },
                ScaleWeight {
                    value: 0.25,
                    weight: 0.0,
                },
            ],
        }
    }
}
