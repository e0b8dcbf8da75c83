// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Proximity: pure geometry helpers for the photo wall.
//!
//! Small, renderer-agnostic functions shared by the virtualization engine
//! and the composition layer:
//!
//! - [`distance`] and [`zone_center`]: point geometry over `kurbo` types.
//! - [`is_on_screen`]: the strict visible-subset predicate (no buffer),
//!   used when ranking tiles for staggered fades.
//! - [`ranks_by_distance`]: stable 0-based ranks of items by distance from
//!   a reference point.
//! - [`proximity_scale`]: the normalized power-curve falloff mapping a
//!   distance to a zoom factor in `[scale_min, scale_max]`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use fresco_proximity::{ProximityConfig, proximity_scale};
//!
//! let cfg = ProximityConfig::default();
//! // At the reference point the scale peaks...
//! let near = proximity_scale(Point::ZERO, Some(Point::ZERO), 1000.0, &cfg);
//! assert_eq!(near, cfg.scale_max);
//! // ...and decays toward the minimum with distance.
//! let far = proximity_scale(Point::new(2000.0, 0.0), Some(Point::ZERO), 1000.0, &cfg);
//! assert_eq!(far, cfg.scale_min);
//! ```

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

/// Tunables for the proximity falloff curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityConfig {
    /// Scale at or beyond the falloff radius (and with no reference point).
    pub scale_min: f64,
    /// Scale at the reference point.
    pub scale_max: f64,
    /// Falloff radius as a fraction of the larger viewport dimension.
    pub radius_ratio: f64,
    /// Power applied to the normalized distance; higher keeps tiles large
    /// closer to the reference point.
    pub falloff: f64,
    /// Per-frame smoothing factor applied by the virtualization engine.
    pub lerp: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            scale_min: 1.0,
            scale_max: 1.5,
            radius_ratio: 0.5,
            falloff: 2.0,
            lerp: 0.06,
        }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Center of a zone anchored at `origin` with the given size.
#[must_use]
pub fn zone_center(origin: Point, zone: Size) -> Point {
    Point::new(origin.x + zone.width / 2.0, origin.y + zone.height / 2.0)
}

/// Whether a screen-space rect intersects the viewport at all.
///
/// This is the strict test used to pick the tiles that participate in a
/// staggered fade; the render-time culling test adds a pixel buffer on top.
#[must_use]
pub fn is_on_screen(rect: Rect, viewport: Size) -> bool {
    rect.x0 < viewport.width && rect.x1 > 0.0 && rect.y0 < viewport.height && rect.y1 > 0.0
}

/// Ranks items by ascending distance from `origin`.
///
/// Returns a map from key to 0-based rank. Ties resolve by the iteration
/// order of `centers`, which makes ranks reproducible for a fixed input.
#[must_use]
pub fn ranks_by_distance<K>(
    centers: impl IntoIterator<Item = (K, Point)>,
    origin: Point,
) -> HashMap<K, usize>
where
    K: Eq + Hash,
{
    let mut ordered: Vec<(K, f64)> = centers
        .into_iter()
        .map(|(key, center)| (key, distance(center, origin)))
        .collect();
    ordered.sort_by(|a, b| a.1.total_cmp(&b.1));
    ordered
        .into_iter()
        .enumerate()
        .map(|(rank, (key, _))| (key, rank))
        .collect()
}

/// Maps the distance from `center` to `reference` onto a zoom scale.
///
/// The curve is `scale_max − (scale_max − scale_min) · min(1, d/r)^falloff`
/// with `r = radius_ratio × max_dimension`. A missing reference point (for
/// example, the pointer has left the surface) yields `scale_min`.
#[must_use]
pub fn proximity_scale(
    center: Point,
    reference: Option<Point>,
    max_dimension: f64,
    config: &ProximityConfig,
) -> f64 {
    let Some(reference) = reference else {
        return config.scale_min;
    };

    let radius = max_dimension * config.radius_ratio;
    if radius <= 0.0 {
        return config.scale_min;
    }

    let t = (distance(center, reference) / radius).min(1.0);
    let falloff = t.powf(config.falloff);
    config.scale_max - (config.scale_max - config.scale_min) * falloff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(
            distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            5.0
        );
    }

    #[test]
    fn zone_center_offsets_by_half_extent() {
        let center = zone_center(Point::new(10.0, 20.0), Size::new(40.0, 60.0));
        assert_eq!(center, Point::new(30.0, 50.0));
    }

    #[test]
    fn on_screen_requires_overlap() {
        let viewport = Size::new(800.0, 600.0);
        assert!(is_on_screen(Rect::new(-10.0, -10.0, 50.0, 50.0), viewport));
        assert!(!is_on_screen(Rect::new(800.0, 0.0, 900.0, 100.0), viewport));
        assert!(!is_on_screen(Rect::new(0.0, -200.0, 100.0, 0.0), viewport));
    }

    #[test]
    fn ranks_order_by_distance() {
        let origin = Point::ZERO;
        let ranks = ranks_by_distance(
            [
                ("far", Point::new(100.0, 0.0)),
                ("near", Point::new(1.0, 0.0)),
                ("mid", Point::new(10.0, 0.0)),
            ],
            origin,
        );
        assert_eq!(ranks["near"], 0);
        assert_eq!(ranks["mid"], 1);
        assert_eq!(ranks["far"], 2);
    }

    #[test]
    fn scale_is_monotone_and_bounded() {
        let cfg = ProximityConfig::default();
        let reference = Some(Point::ZERO);
        let mut previous = f64::INFINITY;
        for step in 0..50 {
            let center = Point::new(f64::from(step) * 40.0, 0.0);
            let scale = proximity_scale(center, reference, 1000.0, &cfg);
            assert!(scale <= cfg.scale_max && scale >= cfg.scale_min);
            assert!(
                scale <= previous,
                "scale must not increase with distance"
            );
            previous = scale;
        }
    }

    #[test]
    fn no_reference_point_collapses_to_min() {
        let cfg = ProximityConfig::default();
        assert_eq!(
            proximity_scale(Point::new(5.0, 5.0), None, 1000.0, &cfg),
            cfg.scale_min
        );
    }

    #[test]
    fn scale_clamps_beyond_radius() {
        let cfg = ProximityConfig::default();
        let at_radius = proximity_scale(
            Point::new(500.0, 0.0),
            Some(Point::ZERO),
            1000.0,
            &cfg,
        );
        let beyond = proximity_scale(
            Point::new(5000.0, 0.0),
            Some(Point::ZERO),
            1000.0,
            &cfg,
        );
        assert_eq!(at_radius, cfg.scale_min);
        assert_eq!(beyond, cfg.scale_min);
    }
}
