// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall replication, wrap correction, culling, and the physics step.

use fresco_data::{ImageDescriptor, MotionMode};
use fresco_layout::{Layout, LayoutConfig};
use fresco_proximity::{proximity_scale, zone_center};
use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Size, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{DeviceClass, MotionConfig};
use crate::viewport::Viewport;

/// Identity of one rendered tile copy: a placement plus its copy indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileKey {
    /// Index into the layout's placements.
    pub placement: usize,
    /// Horizontal copy index.
    pub copy_x: u16,
    /// Vertical copy index.
    pub copy_y: u16,
}

/// One tile copy as computed for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    /// Stable identity across frames.
    pub key: TileKey,
    /// Index of the tile's image in the wall's image list.
    pub image: usize,
    /// Size-class scale drawn at layout time.
    pub layout_scale: f64,
    /// Position on the unwrapped wall, before the pan offset.
    pub absolute: Point,
    /// Wrap-corrected screen position of the zone's top-left corner.
    pub render: Point,
    /// Zone extent in px.
    pub zone: Size,
    /// Whether the tile intersects the buffered viewport.
    pub visible: bool,
    /// Smoothed proximity scale for this frame.
    pub proximity_scale: f64,
}

/// Pixel dimensions derived from the viewport and the logical grid.
#[derive(Clone, Copy, Debug)]
pub struct WallLayout {
    /// One block in px (vh-derived).
    pub block: Size,
    /// One image zone in px (`footprint` blocks per side).
    pub zone: Size,
    /// Logical columns that tile seamlessly (margin column excluded).
    pub effective_cols: usize,
    /// Logical rows that tile seamlessly (margin row excluded).
    pub effective_rows: usize,
    /// One gallery repeat in px.
    pub gallery: Size,
    /// Horizontal copies needed to cover the viewport plus one zone.
    pub copies_x: usize,
    /// Vertical copies needed to cover the viewport plus one zone.
    pub copies_y: usize,
    /// Full replicated wall extent in px.
    pub wall: Size,
}

impl WallLayout {
    /// Derives pixel dimensions for `layout` within `viewport`.
    #[must_use]
    pub fn compute(layout: &Layout, config: &LayoutConfig, viewport: Size) -> Self {
        let vh = viewport.height / 100.0;
        let block = Size::new(config.block_width_vh * vh, config.block_height_vh * vh);
        let footprint = layout.footprint() as f64;
        let zone = Size::new(block.width * footprint, block.height * footprint);

        // The last row and column duplicate the first once wrapped, so they
        // are dropped from the repeating region.
        let effective_cols = layout.width().saturating_sub(1).max(1);
        let effective_rows = layout.height().saturating_sub(1).max(1);
        let gallery = Size::new(
            effective_cols as f64 * block.width,
            effective_rows as f64 * block.height,
        );

        let copies_x = copies_for(viewport.width, zone.width, gallery.width);
        let copies_y = copies_for(viewport.height, zone.height, gallery.height);

        Self {
            block,
            zone,
            effective_cols,
            effective_rows,
            gallery,
            copies_x,
            copies_y,
            wall: Size::new(
                copies_x as f64 * gallery.width,
                copies_y as f64 * gallery.height,
            ),
        }
    }
}

fn copies_for(viewport: f64, zone: f64, gallery: f64) -> usize {
    if gallery <= 0.0 {
        return 1;
    }
    (((viewport + zone) / gallery).ceil() as usize).max(1)
}

/// Shifts a render coordinate back onto the wall when it has drifted more
/// than one zone outside. Idempotent: a corrected coordinate is a fixed
/// point.
#[must_use]
pub fn wrap_correct(render: f64, zone: f64, wall: f64) -> f64 {
    let mut corrected = render;
    if corrected < -zone {
        corrected += wall;
    }
    if corrected > wall - zone {
        corrected -= wall;
    }
    corrected
}

fn wrap_offset(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        offset.rem_euclid(extent)
    } else {
        0.0
    }
}

/// The virtualized wall: replicated tile copies over an unbounded pan
/// offset, advanced by a unified physics step.
///
/// The wall owns no clock and spawns nothing; the host calls
/// [`Wall::step`] once per frame and reads [`Wall::tiles`] back.
#[derive(Debug)]
pub struct Wall<V: Viewport> {
    viewport: V,
    device: DeviceClass,
    config: MotionConfig,
    layout: Layout,
    layout_config: LayoutConfig,
    images: Vec<ImageDescriptor>,
    sizes: WallLayout,
    tiles: Vec<Tile>,
    offset: Vec2,
    velocity: Vec2,
    target_velocity: Vec2,
    dragging: bool,
    motion: MotionMode,
    scales: HashMap<TileKey, f64>,
    scroll_target: Option<Vec2>,
    autoscroll_direction: f64,
    autoscroll_speed: f64,
    ready: bool,
}

impl<V: Viewport> Wall<V> {
    /// Creates a wall over `layout` and its images.
    ///
    /// `seed` fixes the initial autoscroll direction so touch sessions are
    /// reproducible in tests.
    #[must_use]
    pub fn new(
        layout: Layout,
        layout_config: LayoutConfig,
        images: Vec<ImageDescriptor>,
        viewport: V,
        device: DeviceClass,
        config: MotionConfig,
        seed: u64,
    ) -> Self {
        let sizes = WallLayout::compute(&layout, &layout_config, viewport.size());
        let mut rng = SmallRng::seed_from_u64(seed);
        let autoscroll_direction = rng.random::<f64>() * core::f64::consts::TAU;

        Self {
            viewport,
            device,
            config,
            layout,
            layout_config,
            images,
            sizes,
            tiles: Vec::new(),
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target_velocity: Vec2::ZERO,
            dragging: false,
            motion: MotionMode::Active,
            scales: HashMap::new(),
            scroll_target: None,
            autoscroll_direction,
            autoscroll_speed: 1.5,
            ready: false,
        }
    }

    /// The injected viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access for hosts that push size/pointer updates.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Tiles as of the last [`Self::step`].
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The wall's image list, indexed by [`Tile::image`].
    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Current pixel dimensions.
    #[must_use]
    pub fn sizes(&self) -> &WallLayout {
        &self.sizes
    }

    /// Current raw (unwrapped) pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current motion mode.
    #[must_use]
    pub fn motion(&self) -> MotionMode {
        self.motion
    }

    /// Whether a drag currently forces the velocity.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether at least one frame has been computed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether a scroll-to-target ease is active.
    #[must_use]
    pub fn has_scroll_target(&self) -> bool {
        self.scroll_target.is_some()
    }

    /// Switches the motion mode. Entering `paused` or `scroll-only` zeroes
    /// both velocities so no stale motion leaks into the new regime.
    pub fn set_motion(&mut self, motion: MotionMode) {
        self.motion = motion;
        if matches!(motion, MotionMode::Paused | MotionMode::ScrollOnly) {
            self.velocity = Vec2::ZERO;
            self.target_velocity = Vec2::ZERO;
        }
    }

    /// The point proximity scaling attracts toward: the pointer on pointer
    /// devices (if on the surface), the viewport center on touch.
    #[must_use]
    pub fn reference_point(&self) -> Option<Point> {
        match self.device {
            DeviceClass::Touch => {
                let size = self.viewport.size();
                Some(Point::new(size.width / 2.0, size.height / 2.0))
            }
            DeviceClass::Pointer => self.viewport.pointer(),
        }
    }

    /// Advances one frame: recomputes tiles, then (unless paused) blends
    /// the velocity sources, applies friction, integrates the offset, and
    /// eases toward any scroll target.
    pub fn step(&mut self) {
        self.update_tiles();
        self.ready = true;

        if self.motion == MotionMode::Paused {
            return;
        }

        let attraction = self.pointer_attraction_velocity();
        let autoscroll = self.autoscroll_velocity();
        self.target_velocity = attraction + autoscroll;

        let transitioning = self.motion.is_transitioning();
        let lerp = if transitioning {
            self.config.lerp_transition
        } else if self.device == DeviceClass::Touch {
            self.config.lerp_touch
        } else {
            self.config.lerp_pointer
        };
        self.velocity += (self.target_velocity - self.velocity) * lerp;

        let target_magnitude = self.target_velocity.hypot();
        let friction = if transitioning {
            self.config.transition_friction
        } else {
            self.config.friction
        };
        if target_magnitude < 0.01 && !self.dragging {
            self.velocity = self.velocity * friction;
        }
        // A decelerating wall brakes even against a live target, so the
        // fade-out never fights residual attraction.
        if self.motion == MotionMode::Decelerating && target_magnitude > 0.01 {
            self.velocity = self.velocity * self.config.transition_friction;
        }

        if self.velocity.x.abs() < self.config.threshold {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < self.config.threshold {
            self.velocity.y = 0.0;
        }

        let moving = self.velocity.x.abs() > self.config.threshold
            || self.velocity.y.abs() > self.config.threshold;
        if moving || self.dragging {
            self.offset += self.velocity;
            if self.dragging {
                self.scroll_target = None;
            }
        }

        if let Some(target) = self.scroll_target {
            let delta = target - self.offset;
            if delta.hypot() < 1.0 {
                self.offset = target;
                self.scroll_target = None;
            } else {
                self.offset += delta * self.config.scroll_lerp;
            }
        }
    }

    /// Feeds drag state from the gesture recognizer.
    ///
    /// While dragging, the delta becomes the velocity outright. On release,
    /// `final_velocity` seeds inertia, and on touch devices with enough
    /// speed it also re-seeds the autoscroll direction at 0.3× speed.
    pub fn handle_drag(&mut self, delta: Vec2, dragging: bool, final_velocity: Option<Vec2>) {
        if self.motion == MotionMode::Paused {
            return;
        }

        self.dragging = dragging;

        if dragging {
            self.velocity = delta;
            self.target_velocity = delta;
        } else if let Some(velocity) = final_velocity {
            self.velocity = velocity;
            if self.device == DeviceClass::Touch
                && (velocity.x.abs() > 1.0 || velocity.y.abs() > 1.0)
            {
                self.autoscroll_direction = velocity.y.atan2(velocity.x);
                self.autoscroll_speed = (velocity.hypot() * 0.3).clamp(
                    self.config.autoscroll_min_speed,
                    self.config.autoscroll_max_speed,
                );
            }
        }
    }

    /// Adds a wheel delta to the velocity. Suppressed while paused.
    pub fn wheel(&mut self, delta: Vec2) {
        if self.motion == MotionMode::Paused {
            return;
        }
        self.velocity += delta * self.config.wheel_multiplier;
    }

    /// Starts easing toward the first tile of `series`, centered in the
    /// viewport. `None` clears any active target; an unknown series id
    /// leaves the current target untouched.
    pub fn scroll_to_series(&mut self, series: Option<&str>) {
        let Some(series) = series else {
            self.scroll_target = None;
            return;
        };

        let anchor = self
            .layout
            .placements()
            .iter()
            .filter(|p| p.x < self.sizes.effective_cols && p.y < self.sizes.effective_rows)
            .filter(|p| {
                self.images
                    .get(p.image)
                    .is_some_and(|image| image.series_id == series)
            })
            .min_by_key(|p| (p.y, p.x));
        let Some(anchor) = anchor else {
            return;
        };

        let viewport = self.viewport.size();
        let absolute = Point::new(
            anchor.x as f64 * self.sizes.block.width,
            anchor.y as f64 * self.sizes.block.height,
        );
        self.scroll_target = Some(Vec2::new(
            absolute.x - (viewport.width - self.sizes.zone.width) / 2.0,
            absolute.y - (viewport.height - self.sizes.zone.height) / 2.0,
        ));
    }

    /// Recomputes pixel dimensions after a viewport size change and drops
    /// the velocity, since it was calibrated against the old sizes.
    pub fn resize(&mut self) {
        self.sizes = WallLayout::compute(&self.layout, &self.layout_config, self.viewport.size());
        self.velocity = Vec2::ZERO;
    }

    fn pointer_attraction_velocity(&self) -> Vec2 {
        if self.device == DeviceClass::Touch
            || self.dragging
            || matches!(self.motion, MotionMode::Paused | MotionMode::ScrollOnly)
        {
            return Vec2::ZERO;
        }
        let Some(pointer) = self.viewport.pointer() else {
            return Vec2::ZERO;
        };

        let size = self.viewport.size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let toward = pointer - center;
        let distance = toward.hypot();
        let max_radius = center.to_vec2().hypot();
        let dead_zone = max_radius * self.config.pointer_dead_zone;
        if distance < dead_zone || max_radius <= dead_zone {
            return Vec2::ZERO;
        }

        let t = ((distance - dead_zone) / (max_radius - dead_zone)).clamp(0.0, 1.0);
        let speed = self.config.pointer_max_speed * t.powf(self.config.pointer_curve);
        toward * (speed / distance)
    }

    fn autoscroll_velocity(&mut self) -> Vec2 {
        if self.device != DeviceClass::Touch
            || self.dragging
            || matches!(self.motion, MotionMode::Paused | MotionMode::ScrollOnly)
        {
            return Vec2::ZERO;
        }

        let speed = self.autoscroll_speed;
        self.autoscroll_speed = (speed * self.config.autoscroll_decay)
            .max(self.config.autoscroll_min_speed);
        Vec2::new(
            self.autoscroll_direction.cos(),
            self.autoscroll_direction.sin(),
        ) * speed
    }

    fn update_tiles(&mut self) {
        let viewport = self.viewport.size();
        let sizes = self.sizes;
        let wrapped = Vec2::new(
            wrap_offset(self.offset.x, sizes.wall.width),
            wrap_offset(self.offset.y, sizes.wall.height),
        );
        let reference = self.reference_point();
        let max_dimension = viewport.width.max(viewport.height);
        let buffer = self.config.visibility_buffer;
        let paused = self.motion == MotionMode::Paused;

        self.tiles.clear();
        for copy_y in 0..sizes.copies_y {
            for copy_x in 0..sizes.copies_x {
                for (index, placement) in self.layout.placements().iter().enumerate() {
                    if placement.x >= sizes.effective_cols || placement.y >= sizes.effective_rows {
                        continue;
                    }

                    let absolute = Point::new(
                        placement.x as f64 * sizes.block.width
                            + copy_x as f64 * sizes.gallery.width,
                        placement.y as f64 * sizes.block.height
                            + copy_y as f64 * sizes.gallery.height,
                    );
                    let render = Point::new(
                        wrap_correct(absolute.x - wrapped.x, sizes.zone.width, sizes.wall.width),
                        wrap_correct(absolute.y - wrapped.y, sizes.zone.height, sizes.wall.height),
                    );

                    let visible = render.x + sizes.zone.width > -buffer
                        && render.x < viewport.width + buffer
                        && render.y + sizes.zone.height > -buffer
                        && render.y < viewport.height + buffer;

                    let key = TileKey {
                        placement: index,
                        copy_x: copy_x as u16,
                        copy_y: copy_y as u16,
                    };
                    let target_scale = if paused {
                        self.config.proximity.scale_min
                    } else {
                        proximity_scale(
                            zone_center(render, sizes.zone),
                            reference,
                            max_dimension,
                            &self.config.proximity,
                        )
                    };
                    let current = self.scales.get(&key).copied().unwrap_or(target_scale);
                    let smoothed = current + (target_scale - current) * self.config.proximity.lerp;
                    self.scales.insert(key, smoothed);

                    self.tiles.push(Tile {
                        key,
                        image: placement.image,
                        layout_scale: placement.scale,
                        absolute,
                        render,
                        zone: sizes.zone,
                        visible,
                        proximity_scale: smoothed,
                    });
                }
            }
        }

        // Stale copies accumulate after a resize changes the copy counts;
        // prune once they exceed 10% of the live set.
        if self.scales.len() as f64 > self.tiles.len() as f64 * 1.1 {
            let live: HashSet<TileKey> = self.tiles.iter().map(|tile| tile.key).collect();
            self.scales.retain(|key, _| live.contains(key));
        }
    }
}
