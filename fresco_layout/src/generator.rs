// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid sizing and first-fit placement with toroidal edge constraints.

use hashbrown::HashSet;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::config::{LayoutConfig, ScaleWeight};
use crate::noise::Noise;

/// Grid dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Columns (`L`).
    pub width: usize,
    /// Rows (`H`).
    pub height: usize,
}

/// Chooses grid dimensions for `image_count` footprints at `fill_ratio`.
///
/// The cell budget is `ceil(count × footprint² / fill_ratio)`. Column counts
/// near `√budget` are tried and the configuration with minimal total area
/// that still covers the budget wins; one margin row and column are then
/// added to each dimension.
#[must_use]
pub fn grid_size(image_count: usize, fill_ratio: f64, footprint: usize) -> GridSize {
    if image_count == 0 {
        return GridSize {
            width: 2,
            height: 2,
        };
    }

    let cells_per_image = footprint * footprint;
    let budget = ((image_count * cells_per_image) as f64 / fill_ratio).ceil() as usize;
    let base = (budget as f64).sqrt() as usize;

    let mut best: Option<(usize, usize, usize)> = None;
    for cols in base.saturating_sub(1)..=base + 2 {
        if cols == 0 {
            continue;
        }
        let rows = budget.div_ceil(cols);
        let area = cols * rows;
        if area >= budget && best.is_none_or(|(a, _, _)| area < a) {
            best = Some((area, cols, rows));
        }
    }

    // `rows = ceil(budget / cols)` always covers the budget, so a candidate
    // is always found.
    let (_, cols, rows) = best.unwrap_or((budget, budget.max(1), 1));
    GridSize {
        width: cols + 1,
        height: rows + 1,
    }
}

/// One placed image: footprint anchor, input index, and size-class scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Anchor column of the footprint's top-left cell.
    pub x: usize,
    /// Anchor row of the footprint's top-left cell.
    pub y: usize,
    /// Index of the image in the generator's input order.
    pub image: usize,
    /// Size-class scale drawn from the weighted distribution.
    pub scale: f64,
}

/// A generated layout: grid dimensions, anchor cells, and placements.
#[derive(Clone, Debug)]
pub struct Layout {
    width: usize,
    height: usize,
    footprint: usize,
    cells: Vec<Option<usize>>,
    placements: Vec<Placement>,
}

impl Layout {
    /// Generates a layout for `image_count` images.
    ///
    /// The same `seed` reproduces the same layout. Images that cannot be
    /// placed are skipped with a warning; the layout itself never fails.
    /// Zero images yield a 1×1 empty grid.
    #[must_use]
    pub fn generate(image_count: usize, config: &LayoutConfig, seed: u64) -> Self {
        let footprint = config.blocks_per_image.max(1);

        if image_count == 0 {
            return Self {
                width: 1,
                height: 1,
                footprint,
                cells: vec![None],
                placements: Vec::new(),
            };
        }

        let GridSize { width, height } = grid_size(image_count, config.fill_ratio, footprint);
        let mut rng = SmallRng::seed_from_u64(seed);
        let noise = Noise::new(rng.random_range(0.0..10_000.0));

        // Every valid top-left anchor for a footprint, scored by the noise
        // field, best-first. Shuffling only the top 40% keeps the broad
        // clustering while varying the fine order.
        let mut pool: Vec<(usize, usize, f64)> = Vec::new();
        for y in 0..=(height - footprint) {
            for x in 0..=(width - footprint) {
                pool.push((x, y, noise.sample(x as f64, y as f64)));
            }
        }
        pool.sort_by(|a, b| b.2.total_cmp(&a.2));
        let cut = (((pool.len() as f64) * 0.4).ceil() as usize).min(pool.len());
        pool[..cut].shuffle(&mut rng);

        let mut occupied: HashSet<(usize, usize)> = HashSet::new();
        let mut forbidden: HashSet<(usize, usize)> = HashSet::new();
        let mut placements: Vec<Placement> = Vec::with_capacity(image_count);

        for image in 0..image_count {
            let anchor = pool.iter().find(|&&(x, y, _)| {
                footprint_cells(x, y, footprint).all(|c| !occupied.contains(&c))
                    && footprint_cells(x, y, footprint).all(|c| !forbidden.contains(&c))
            });
            let Some(&(x, y, _)) = anchor else {
                warn!(image, "no free anchor left; dropping image from the wall");
                continue;
            };

            let scale = pick_scale(&config.scales, &mut rng);
            placements.push(Placement {
                x,
                y,
                image,
                scale,
            });

            for cell in footprint_cells(x, y, footprint) {
                occupied.insert(cell);
            }
            forbid_wrapped_edges(&mut forbidden, x, y, footprint, width, height);
        }

        let mut cells = vec![None; width * height];
        for (i, p) in placements.iter().enumerate() {
            cells[p.y * width + p.x] = Some(i);
        }

        Self {
            width,
            height,
            footprint,
            cells,
            placements,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Footprint side length in cells.
    #[must_use]
    pub fn footprint(&self) -> usize {
        self.footprint
    }

    /// All placements in input order (minus any dropped images).
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The placement anchored at `(x, y)`, if any.
    #[must_use]
    pub fn anchor_at(&self, x: usize, y: usize) -> Option<&Placement> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x].map(|i| &self.placements[i])
    }
}

fn footprint_cells(
    x: usize,
    y: usize,
    footprint: usize,
) -> impl Iterator<Item = (usize, usize)> + Clone {
    (0..footprint).flat_map(move |dy| (0..footprint).map(move |dx| (x + dx, y + dy)))
}

/// For every footprint cell lying on a grid edge, forbids the mirrored cell
/// at the opposite edge. Applied symmetrically on all four edges, this keeps
/// two tiles from becoming screen-adjacent once the grid wraps.
fn forbid_wrapped_edges(
    forbidden: &mut HashSet<(usize, usize)>,
    x: usize,
    y: usize,
    footprint: usize,
    width: usize,
    height: usize,
) {
    for (cx, cy) in footprint_cells(x, y, footprint) {
        if cy == 0 {
            forbidden.insert((cx, height - 1));
        }
        if cy == height - 1 {
            forbidden.insert((cx, 0));
        }
        if cx == 0 {
            forbidden.insert((width - 1, cy));
        }
        if cx == width - 1 {
            forbidden.insert((0, cy));
        }
    }
}

fn pick_scale(scales: &[ScaleWeight], rng: &mut SmallRng) -> f64 {
    if scales.is_empty() {
        return 1.0;
    }
    let total: f64 = scales.iter().map(|s| s.weight).sum();
    let mut draw = rng.random::<f64>() * total;
    for s in scales {
        draw -= s.weight;
        if draw <= 0.0 {
            return s.value;
        }
    }
    scales[0].value
}
