// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fresco Session: the layer that wires the engine together.
//!
//! A [`Session`] owns the three moving parts (the [`Sequencer`] holding
//! choreography state, the [`Wall`] with its physics and virtualization,
//! and the [`DragRecognizer`]) and exposes the surface a host renders
//! against: feed it pointer/touch/wheel events and one [`Session::frame`]
//! call per frame, read tiles, hover info, stagger delays, and the
//! sequencer state back.
//!
//! The session also implements the flows that span components: hit-testing
//! hover and clicks, opening the viewer from a tile or a menu entry,
//! computing stagger ranks from an interaction origin, highlight-and-scroll
//! on menu hover, and viewer navigation with preload planning.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use fresco_data::{CdnResolver, GridPhase, Locale};
//! use fresco_session::{Session, SessionOptions};
//! use fresco_wall::{DeviceClass, StaticViewport};
//!
//! let mut session = Session::new(
//!     Vec::new(),
//!     Vec::new(),
//!     StaticViewport::new(Size::new(1280.0, 800.0)),
//!     DeviceClass::Pointer,
//!     CdnResolver::new("https://cdn.example.com"),
//!     SessionOptions::default(),
//! );
//!
//! // An empty payload never ripples in; with images, the first frame
//! // would start the initial-load sequence here.
//! session.frame(0);
//! assert_eq!(session.state().grid, GridPhase::InitialHidden);
//! assert_eq!(session.background_color(), "#070707");
//! ```

use core::fmt;

use fresco_data::{
    AssetResolver, GridPhase, ImageDescriptor, ImagePreloader, LayerAnim, LayerPhase, Locale,
    PreloadPlan, STAGGER_EASING, Series, ViewerImage, ViewerPayload, contrast_text_color,
    optimal_width,
};
use fresco_gesture::{DragRecognizer, GestureConfig, PressTarget};
use fresco_layout::{Layout, LayoutConfig};
use fresco_proximity::{distance, is_on_screen, ranks_by_distance, zone_center};
use fresco_sequencer::{
    HIGHLIGHT_APPEAR_MS, HIGHLIGHT_DISAPPEAR_MS, HIGHLIGHT_SWITCH_MS, Patch, PlayParams, Sequencer,
    SequencerState, STAGGER_ITEM_FADE_MS, STAGGER_STEP_MS, stagger_duration_ms,
};
use fresco_wall::{DeviceClass, MotionConfig, Tile, TileKey, Viewport, Wall};
use hashbrown::{HashMap, HashSet};
use kurbo::{Point, Rect, Size, Vec2};

/// Widths of the responsive variants served to the viewer.
const VIEWER_WIDTHS: [u32; 3] = [1200, 1800, 2400];
/// Width of the default viewer URL.
const VIEWER_DEFAULT_WIDTH: u32 = 1800;

/// Session-wide options.
#[derive(Clone, Debug)]
pub struct SessionOptions {
    /// Locale used to resolve localized titles for hover and viewer text.
    pub locale: Locale,
    /// Background color when nothing is hovered or open (CSS color string).
    pub default_background: String,
    /// Seed shared by layout generation and autoscroll direction.
    pub seed: u64,
    /// Device pixel ratio, used to pick the srcset variant worth preloading.
    pub device_pixel_ratio: f64,
    /// Wall physics tunables.
    pub motion: MotionConfig,
    /// Layout tunables.
    pub layout: LayoutConfig,
    /// Gesture tunables.
    pub gesture: GestureConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            locale: Locale::Fr,
            default_background: "#070707".to_owned(),
            seed: 0,
            device_pixel_ratio: 1.0,
            motion: MotionConfig::default(),
            layout: LayoutConfig::default(),
            gesture: GestureConfig::default(),
        }
    }
}

/// What the pointer (or, on touch, the viewport center) currently rests on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverInfo {
    /// Resolved series title.
    pub series_title: String,
    /// Ordinal of the hovered image within its series.
    pub index_in_series: usize,
    /// Sibling count within the series.
    pub total_in_series: usize,
}

/// The assembled engine: sequencer, wall, and gesture capture behind one
/// event-and-frame surface.
pub struct Session<V: Viewport, R: AssetResolver> {
    sequencer: Sequencer,
    wall: Wall<V>,
    drag: DragRecognizer,
    series: Vec<Series>,
    resolver: R,
    preloader: Option<Box<dyn ImagePreloader>>,
    locale: Locale,
    default_background: String,
    device_pixel_ratio: f64,
    ranks: Option<HashMap<TileKey, usize>>,
    initial_visible: HashSet<TileKey>,
    initial_animated: bool,
    hovered: Option<HoverInfo>,
    hovered_background: Option<String>,
}

impl<V: Viewport, R: AssetResolver> fmt::Debug for Session<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("sequencer", &self.sequencer)
            .field("locale", &self.locale)
            .field("initial_animated", &self.initial_animated)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl<V: Viewport, R: AssetResolver> Session<V, R> {
    /// Builds a session over pre-resolved content.
    ///
    /// `images` is the flattened wall payload; `series` carries the full
    /// image lists the viewer pages through.
    #[must_use]
    pub fn new(
        series: Vec<Series>,
        images: Vec<ImageDescriptor>,
        viewport: V,
        device: DeviceClass,
        resolver: R,
        options: SessionOptions,
    ) -> Self {
        let layout = Layout::generate(images.len(), &options.layout, options.seed);
        let wall = Wall::new(
            layout,
            options.layout,
            images,
            viewport,
            device,
            options.motion,
            options.seed,
        );

        Self {
            sequencer: Sequencer::new(),
            wall,
            drag: DragRecognizer::new(options.gesture),
            series,
            resolver,
            preloader: None,
            locale: options.locale,
            default_background: options.default_background,
            device_pixel_ratio: options.device_pixel_ratio,
            ranks: None,
            initial_visible: HashSet::new(),
            initial_animated: false,
            hovered: None,
            hovered_background: None,
        }
    }

    /// Installs a preloader; viewer opens and navigation feed it plans.
    pub fn set_preloader(&mut self, preloader: Box<dyn ImagePreloader>) {
        self.preloader = Some(preloader);
    }

    /// The current choreography state.
    #[must_use]
    pub fn state(&self) -> &SequencerState {
        self.sequencer.state()
    }

    /// The wall, for reading tiles and sizes.
    #[must_use]
    pub fn wall(&self) -> &Wall<V> {
        &self.wall
    }

    /// Mutable access to the injected viewport, for hosts that push size
    /// and pointer updates into it.
    pub fn viewport_mut(&mut self) -> &mut V {
        self.wall.viewport_mut()
    }

    /// Current hover info, if anything is hovered.
    #[must_use]
    pub fn hovered(&self) -> Option<&HoverInfo> {
        self.hovered.as_ref()
    }

    /// The effective background color: the open viewer's, else the hovered
    /// series', else the default.
    #[must_use]
    pub fn background_color(&self) -> &str {
        self.sequencer
            .state()
            .viewer
            .as_ref()
            .and_then(|viewer| viewer.background_color.as_deref())
            .or(self.hovered_background.as_deref())
            .unwrap_or(&self.default_background)
    }

    /// Readable text color over [`Self::background_color`].
    #[must_use]
    pub fn text_color(&self) -> &'static str {
        contrast_text_color(Some(self.background_color()))
    }

    /// Advances one frame: drains due sequencer steps, syncs the motion
    /// mode into the wall, steps the physics, refreshes hover, and fires
    /// the initial ripple-in once the first tiles exist.
    pub fn frame(&mut self, now_ms: u64) {
        self.sequencer.tick(now_ms);

        let motion = self.sequencer.state().motion;
        if motion != self.wall.motion() {
            self.wall.set_motion(motion);
        }

        self.wall.step();
        self.update_hover();
        self.maybe_start_initial_load(now_ms);
    }

    /// Feeds a press. `target` decides whether this can become a wall drag.
    pub fn pointer_pressed(&mut self, pos: Point, now_ms: u64, target: PressTarget) {
        self.drag.press(pos, now_ms, target);
    }

    /// Feeds a pointer/touch move sample.
    pub fn pointer_moved(&mut self, pos: Point, now_ms: u64) {
        if let Some(delta) = self.drag.move_to(pos, now_ms) {
            self.wall
                .handle_drag(Vec2::new(delta.dx, delta.dy), true, None);
        }
    }

    /// Feeds a release; a moved drag seeds wall inertia.
    pub fn pointer_released(&mut self) {
        if let Some(end) = self.drag.release() {
            self.wall.handle_drag(Vec2::ZERO, false, end.velocity);
        }
    }

    /// The pointer left the surface: ends any drag and clears hover.
    pub fn pointer_left(&mut self) {
        self.pointer_released();
        self.hovered = None;
        self.hovered_background = None;
    }

    /// Feeds a wheel delta.
    pub fn wheel(&mut self, delta: Vec2) {
        self.wall.wheel(delta);
    }

    /// Whether a drag gesture is currently forcing the wall.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.has_moved()
    }

    /// Opens the viewer for the clicked image's series, rippling the grid
    /// out from the click position. Ignored while a grid fade is in flight.
    pub fn image_clicked(&mut self, image_id: &str, click_position: Point, now_ms: u64) {
        if self.sequencer.state().grid.is_fading() {
            return;
        }

        let Some(image) = self
            .wall
            .images()
            .iter()
            .find(|image| image.id == image_id)
            .cloned()
        else {
            return;
        };
        let Some(series) = self
            .series
            .iter()
            .find(|series| series.id == image.series_id)
            .cloned()
        else {
            return;
        };

        let mut payload = self.viewer_payload(&series);
        payload.current_index = payload
            .images
            .iter()
            .position(|img| img.id == image_id)
            .unwrap_or(0);
        self.plan_preload(&payload);

        let stagger = self.restagger(click_position);
        self.sequencer.play(
            "open-viewer",
            PlayParams {
                stagger_duration_ms: stagger,
                data: Some(Patch::new().viewer(Some(payload))),
            },
            now_ms,
        );
    }

    /// Closes the viewer, rippling the grid back in from the pointer (or
    /// the viewport center when there is none).
    pub fn close_viewer(&mut self, now_ms: u64) {
        let origin = self.interaction_origin();
        let stagger = self.restagger(origin);
        self.sequencer.play(
            "close-viewer",
            PlayParams {
                stagger_duration_ms: stagger,
                data: None,
            },
            now_ms,
        );
    }

    /// Steps the open viewer to the next image, wrapping at the end.
    pub fn viewer_next(&mut self) {
        self.step_viewer(1);
    }

    /// Steps the open viewer to the previous image, wrapping at the start.
    pub fn viewer_prev(&mut self) {
        self.step_viewer(-1);
    }

    /// Toggles the viewer info panel.
    pub fn toggle_infos(&mut self, now_ms: u64) {
        let open = self.sequencer.state().viewer_infos.phase == LayerPhase::Visible;
        let name = if open { "hide-infos" } else { "show-infos" };
        self.sequencer.play(name, PlayParams::default(), now_ms);
    }

    /// Opens the menu, rippling the grid out from the click position.
    /// Ignored while a grid fade is in flight or the menu is already open.
    pub fn open_menu(&mut self, click_position: Point, now_ms: u64) {
        let state = self.sequencer.state();
        if state.grid.is_fading() || state.menu {
            return;
        }
        let stagger = self.restagger(click_position);
        self.sequencer.play(
            "open-menu",
            PlayParams {
                stagger_duration_ms: stagger,
                data: None,
            },
            now_ms,
        );
    }

    /// Closes the menu, clearing any highlight scroll and rippling the grid
    /// back in.
    pub fn close_menu(&mut self, now_ms: u64) {
        self.wall.scroll_to_series(None);
        let origin = self.interaction_origin();
        let stagger = self.restagger(origin);
        self.sequencer.play(
            "close-menu",
            PlayParams {
                stagger_duration_ms: stagger,
                data: None,
            },
            now_ms,
        );
    }

    /// Updates the menu highlight. The transition duration depends on the
    /// edge: appearing, switching between series, or disappearing.
    pub fn menu_hover(&mut self, series_id: Option<&str>) {
        let previous = self.sequencer.state().highlighted_series.as_deref();
        let duration = match (previous, series_id) {
            (None, Some(_)) | (None, None) => HIGHLIGHT_APPEAR_MS,
            (Some(prev), Some(next)) if prev != next => HIGHLIGHT_SWITCH_MS,
            (Some(_), Some(_)) => HIGHLIGHT_APPEAR_MS,
            (Some(_), None) => HIGHLIGHT_DISAPPEAR_MS,
        };
        self.sequencer.set(
            &Patch::new()
                .highlighted_series(series_id.map(str::to_owned))
                .highlight_duration_ms(duration),
        );
        self.wall.scroll_to_series(series_id);
    }

    /// Opens the viewer straight from a menu entry. An unknown id just
    /// closes the menu.
    pub fn menu_select(&mut self, series_id: &str, now_ms: u64) {
        let Some(series) = self
            .series
            .iter()
            .find(|series| series.id == series_id)
            .cloned()
        else {
            self.sequencer
                .set(&Patch::new().menu(false).highlighted_series(None));
            return;
        };

        let payload = self.viewer_payload(&series);
        self.plan_preload(&payload);
        self.wall.scroll_to_series(None);
        self.sequencer.play(
            "menu-to-viewer",
            PlayParams {
                stagger_duration_ms: 0,
                data: Some(Patch::new().viewer(Some(payload))),
            },
            now_ms,
        );
    }

    /// Stagger delay for a tile during the current fade, in milliseconds.
    /// Zero outside fades or for tiles without a rank.
    #[must_use]
    pub fn tile_stagger_delay(&self, key: TileKey) -> u64 {
        if !self.sequencer.state().grid.is_fading() {
            return 0;
        }
        self.ranks
            .as_ref()
            .and_then(|ranks| ranks.get(&key))
            .map_or(0, |&rank| rank as u64 * STAGGER_STEP_MS)
    }

    /// Whether a tile is forced fully hidden: before the initial ripple,
    /// behind an open viewer, or unranked during a fade-out.
    #[must_use]
    pub fn tile_force_hidden(&self, key: TileKey) -> bool {
        let grid = self.sequencer.state().grid;
        match grid {
            GridPhase::InitialHidden | GridPhase::Hidden => true,
            GridPhase::FadingOut => self
                .ranks
                .as_ref()
                .is_none_or(|ranks| !ranks.contains_key(&key)),
            _ => false,
        }
    }

    /// Whether a tile was on screen when the initial ripple-in played.
    #[must_use]
    pub fn tile_initially_visible(&self, key: TileKey) -> bool {
        self.initial_visible.contains(&key)
    }

    /// The per-tile animation of the current grid fade: target phase, item
    /// fade duration, and the stagger easing. `None` outside fades. Hosts
    /// apply it after the tile's [`Self::tile_stagger_delay`].
    #[must_use]
    pub fn tile_fade(&self) -> Option<LayerAnim> {
        match self.sequencer.state().grid {
            GridPhase::FadingIn => Some(LayerAnim::new(
                LayerPhase::Visible,
                STAGGER_ITEM_FADE_MS,
                STAGGER_EASING,
            )),
            GridPhase::FadingOut => Some(LayerAnim::new(
                LayerPhase::Hidden,
                STAGGER_ITEM_FADE_MS,
                STAGGER_EASING,
            )),
            _ => None,
        }
    }

    fn step_viewer(&mut self, step: isize) {
        let Some(viewer) = self.sequencer.state().viewer.clone() else {
            return;
        };
        let len = viewer.images.len();
        if len == 0 {
            return;
        }

        let next = (viewer.current_index as isize + step).rem_euclid(len as isize) as usize;
        let payload = ViewerPayload {
            current_index: next,
            ..viewer
        };
        self.plan_preload(&payload);
        self.sequencer.set(&Patch::new().viewer(Some(payload)));
    }

    /// Ripple origin for viewer/menu closes: the pointer if it is on the
    /// surface, else the viewport center.
    fn interaction_origin(&self) -> Point {
        self.wall.viewport().pointer().unwrap_or_else(|| {
            let size = self.wall.viewport().size();
            Point::new(size.width / 2.0, size.height / 2.0)
        })
    }

    /// Ranks the strictly-visible tiles by distance from `origin` and
    /// returns the stagger duration of the resulting fade.
    fn restagger(&mut self, origin: Point) -> u64 {
        let viewport = self.wall.viewport().size();
        let visible = strictly_visible(self.wall.tiles(), viewport);
        let count = visible.len();
        let ranks = ranks_by_distance(
            visible
                .into_iter()
                .map(|tile| (tile.key, zone_center(tile.render, tile.zone))),
            origin,
        );
        self.ranks = Some(ranks);
        stagger_duration_ms(count.saturating_sub(1))
    }

    fn maybe_start_initial_load(&mut self, now_ms: u64) {
        if self.initial_animated
            || !self.wall.is_ready()
            || self.wall.tiles().is_empty()
            || self.sequencer.state().grid != GridPhase::InitialHidden
        {
            return;
        }
        self.initial_animated = true;

        let size = self.wall.viewport().size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let visible = strictly_visible(self.wall.tiles(), size);
        self.initial_visible = visible.iter().map(|tile| tile.key).collect();
        let stagger = self.restagger(center);

        self.sequencer.play(
            "initial-load",
            PlayParams {
                stagger_duration_ms: stagger,
                data: None,
            },
            now_ms,
        );
    }

    fn update_hover(&mut self) {
        if self.sequencer.state().menu {
            return;
        }

        let tile = match self.wall.reference_point() {
            Some(reference) => match self.wall.viewport().pointer() {
                // Pointer device: the tile under the pointer.
                Some(pointer) => tile_at_point(self.wall.tiles(), pointer),
                // Touch: the tile nearest the viewport center.
                None => closest_tile(self.wall.tiles(), reference),
            },
            None => None,
        };

        match tile {
            Some(tile) => {
                let image = &self.wall.images()[tile.image];
                self.hovered = Some(HoverInfo {
                    series_title: image.series_title.resolve(self.locale).to_owned(),
                    index_in_series: image.index_in_series,
                    total_in_series: image.total_in_series,
                });
                self.hovered_background = image.background_color.clone();
            }
            None => {
                self.hovered = None;
                self.hovered_background = None;
            }
        }
    }

    fn viewer_payload(&self, series: &Series) -> ViewerPayload {
        let total = series.images.len();
        let images = series
            .images
            .iter()
            .enumerate()
            .map(|(index, img)| ViewerImage {
                id: img.key.clone(),
                url: self.resolver.url(
                    &img.asset,
                    VIEWER_DEFAULT_WIDTH,
                    fresco_data::ResolveParams::display(),
                ),
                src_set: self.resolver.src_set(&img.asset, &VIEWER_WIDTHS),
                alt: if img.alt.is_empty() {
                    series.title.resolve(self.locale).to_owned()
                } else {
                    img.alt.clone()
                },
                series_title: series.title.clone(),
                index_in_series: index,
                total_in_series: total,
            })
            .collect();

        ViewerPayload {
            series_id: series.id.clone(),
            images,
            current_index: 0,
            background_color: series.background_color.clone(),
            description: series.description.clone(),
        }
    }

    /// Preloads the srcset variant the viewer will actually show, picked
    /// from the viewport width and the device pixel ratio.
    fn plan_preload(&mut self, payload: &ViewerPayload) {
        let Some(preloader) = self.preloader.as_deref_mut() else {
            return;
        };
        let width = optimal_width(self.wall.viewport().size().width, self.device_pixel_ratio);
        PreloadPlan::for_index(payload.images.len(), payload.current_index).dispatch(
            preloader,
            |i| {
                let image = &payload.images[i];
                image
                    .src_set
                    .iter()
                    .find(|entry| entry.width == width)
                    .map_or_else(|| image.url.clone(), |entry| entry.url.clone())
            },
        );
    }
}

fn strictly_visible(tiles: &[Tile], viewport: Size) -> Vec<&Tile> {
    tiles
        .iter()
        .filter(|tile| is_on_screen(Rect::from_origin_size(tile.render, tile.zone), viewport))
        .collect()
}

fn tile_at_point(tiles: &[Tile], point: Point) -> Option<&Tile> {
    tiles.iter().find(|tile| {
        point.x >= tile.render.x
            && point.x <= tile.render.x + tile.zone.width
            && point.y >= tile.render.y
            && point.y <= tile.render.y + tile.zone.height
    })
}

fn closest_tile(tiles: &[Tile], reference: Point) -> Option<&Tile> {
    tiles.iter().min_by(|a, b| {
        let da = distance(zone_center(a.render, a.zone), reference);
        let db = distance(zone_center(b.render, b.zone), reference);
        da.total_cmp(&db)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use fresco_data::{
        AssetRef, CdnResolver, LocalizedString, MotionMode, PreloadPriority, SeriesImage,
    };
    use fresco_wall::StaticViewport;

    use super::*;

    /// Records preload requests through a shared handle, since the session
    /// takes the preloader by box.
    #[derive(Clone, Default)]
    struct RecordingPreloader(Rc<RefCell<Vec<(String, PreloadPriority)>>>);

    impl ImagePreloader for RecordingPreloader {
        fn request(&mut self, url: &str, priority: PreloadPriority) {
            self.0.borrow_mut().push((url.to_owned(), priority));
        }
    }

    fn series(id: &str, image_count: usize, background: Option<&str>) -> Series {
        Series {
            id: id.to_owned(),
            title: LocalizedString::new(format!("{id} (fr)"), format!("{id} (en)")),
            images: (0..image_count)
                .map(|i| SeriesImage {
                    key: format!("{id}-img-{i}"),
                    alt: format!("{id} {i}"),
                    asset: AssetRef::new(format!("{id}-asset-{i}")),
                    width: 2400,
                    height: 1600,
                })
                .collect(),
            grid_count: image_count,
            background_color: background.map(str::to_owned),
            description: None,
        }
    }

    fn descriptors(all: &[Series]) -> Vec<ImageDescriptor> {
        let mut out = Vec::new();
        for s in all {
            for (i, img) in s.images.iter().enumerate().take(s.grid_count) {
                out.push(ImageDescriptor {
                    id: img.key.clone(),
                    url: format!("https://cdn.example.com/{}?w=800", img.asset.0),
                    src_set: Vec::new(),
                    url_large: format!("https://cdn.example.com/{}?w=1800", img.asset.0),
                    lqip: format!("https://cdn.example.com/{}?w=20&blur=50", img.asset.0),
                    alt: img.alt.clone(),
                    series_id: s.id.clone(),
                    series_title: s.title.clone(),
                    index_in_series: i,
                    total_in_series: s.images.len(),
                    aspect_ratio: 1.5,
                    background_color: s.background_color.clone(),
                });
            }
        }
        out
    }

    fn session() -> Session<StaticViewport, CdnResolver> {
        let all = vec![
            series("dunes", 3, Some("#112233")),
            series("harbors", 4, None),
        ];
        let images = descriptors(&all);
        Session::new(
            all,
            images,
            StaticViewport::new(Size::new(1280.0, 800.0)),
            DeviceClass::Pointer,
            CdnResolver::new("https://cdn.example.com"),
            SessionOptions {
                seed: 7,
                ..SessionOptions::default()
            },
        )
    }

    /// Runs frames until the current sequence finishes.
    fn settle(session: &mut Session<StaticViewport, CdnResolver>, mut now: u64) -> u64 {
        for _ in 0..10_000 {
            session.frame(now);
            if !session.sequencer.is_playing() {
                return now;
            }
            now += 16;
        }
        panic!("sequence never settled");
    }

    #[test]
    fn first_frame_starts_the_initial_ripple_once() {
        let mut s = session();
        s.frame(0);
        assert_eq!(s.state().grid, GridPhase::FadingIn);
        assert_eq!(s.sequencer.playing(), Some("initial-load"));

        let now = settle(&mut s, 16);
        assert_eq!(s.state().grid, GridPhase::Visible);
        assert!(s.state().header);

        // Later frames do not replay it.
        s.frame(now + 16);
        assert!(!s.sequencer.is_playing());
    }

    #[test]
    fn hover_resolves_series_title_and_background() {
        let mut s = session();
        let now = settle(&mut s, 0);

        let tile = *s
            .wall()
            .tiles()
            .iter()
            .find(|tile| tile.visible)
            .expect("a visible tile");
        let center = zone_center(tile.render, tile.zone);
        let image = s.wall().images()[tile.image].clone();

        s.viewport_mut().pointer = Some(center);
        s.frame(now + 16);

        let hover = s.hovered().expect("hover info");
        assert_eq!(
            hover.series_title,
            image.series_title.resolve(Locale::Fr)
        );
        assert_eq!(hover.total_in_series, image.total_in_series);
        if image.background_color.is_some() {
            assert_eq!(s.background_color(), image.background_color.as_deref().unwrap());
        }

        s.viewport_mut().pointer = None;
        s.pointer_left();
        assert!(s.hovered().is_none());
        assert_eq!(s.background_color(), "#070707");
        assert_eq!(s.text_color(), "#ffffff");
    }

    #[test]
    fn image_click_opens_viewer_at_the_clicked_image() {
        let mut s = session();
        let now = settle(&mut s, 0);

        s.image_clicked("dunes-img-1", Point::new(200.0, 200.0), now + 16);
        let viewer = s.state().viewer.as_ref().expect("viewer payload");
        assert_eq!(viewer.series_id, "dunes");
        assert_eq!(viewer.current_index, 1);
        assert_eq!(viewer.images.len(), 3);
        assert!(viewer.images[0].url.contains("w=1800"));
        assert_eq!(s.state().grid, GridPhase::FadingOut);

        let now = settle(&mut s, now + 16);
        assert_eq!(s.state().grid, GridPhase::Hidden);
        assert_eq!(s.state().motion, MotionMode::Paused);
        assert_eq!(s.state().viewer_ui.phase, LayerPhase::Visible);

        // And the wall really pauses.
        assert_eq!(s.wall().motion(), MotionMode::Paused);
        let _ = now;
    }

    #[test]
    fn clicks_during_fades_are_ignored() {
        let mut s = session();
        s.frame(0);
        assert_eq!(s.state().grid, GridPhase::FadingIn);
        s.image_clicked("dunes-img-0", Point::ZERO, 16);
        assert!(s.state().viewer.is_none());
        assert_eq!(s.sequencer.playing(), Some("initial-load"));
    }

    #[test]
    fn viewer_navigation_wraps_both_ways() {
        let mut s = session();
        let now = settle(&mut s, 0);
        s.image_clicked("harbors-img-0", Point::ZERO, now);
        let now = settle(&mut s, now);

        s.viewer_prev();
        assert_eq!(s.state().viewer.as_ref().unwrap().current_index, 3);
        s.viewer_next();
        assert_eq!(s.state().viewer.as_ref().unwrap().current_index, 0);
        let _ = now;
    }

    #[test]
    fn close_viewer_restores_the_grid() {
        let mut s = session();
        let now = settle(&mut s, 0);
        s.image_clicked("dunes-img-0", Point::ZERO, now);
        let now = settle(&mut s, now);

        s.close_viewer(now);
        let _ = settle(&mut s, now);
        assert!(s.state().viewer.is_none());
        assert_eq!(s.state().grid, GridPhase::Visible);
        assert_eq!(s.state().motion, MotionMode::Active);
    }

    #[test]
    fn menu_hover_picks_the_right_transition_duration() {
        let mut s = session();
        let now = settle(&mut s, 0);
        s.open_menu(Point::new(100.0, 100.0), now);
        let now = settle(&mut s, now);
        assert!(s.state().menu);
        assert_eq!(s.state().motion, MotionMode::ScrollOnly);

        s.menu_hover(Some("dunes"));
        assert_eq!(s.state().highlight_duration_ms, HIGHLIGHT_APPEAR_MS);
        assert!(s.wall().has_scroll_target());

        s.menu_hover(Some("harbors"));
        assert_eq!(s.state().highlight_duration_ms, HIGHLIGHT_SWITCH_MS);

        s.menu_hover(None);
        assert_eq!(s.state().highlight_duration_ms, HIGHLIGHT_DISAPPEAR_MS);
        assert!(s.state().highlighted_series.is_none());
        assert!(!s.wall().has_scroll_target());
        let _ = now;
    }

    #[test]
    fn menu_select_jumps_straight_to_the_viewer() {
        let mut s = session();
        let now = settle(&mut s, 0);
        s.open_menu(Point::ZERO, now);
        let now = settle(&mut s, now);

        s.menu_select("harbors", now);
        assert!(!s.state().menu);
        assert_eq!(s.state().grid, GridPhase::Hidden);
        let viewer = s.state().viewer.as_ref().expect("viewer payload");
        assert_eq!(viewer.series_id, "harbors");
        assert_eq!(viewer.current_index, 0);

        let _ = settle(&mut s, now);
        assert_eq!(s.state().viewer_image.phase, LayerPhase::Visible);
    }

    #[test]
    fn menu_select_with_unknown_series_just_closes_the_menu() {
        let mut s = session();
        let now = settle(&mut s, 0);
        s.open_menu(Point::ZERO, now);
        let now = settle(&mut s, now);

        s.menu_select("nope", now);
        assert!(!s.state().menu);
        assert!(s.state().viewer.is_none());
    }

    #[test]
    fn stagger_delays_follow_ranks_during_fades() {
        let mut s = session();
        s.frame(0);
        assert_eq!(s.state().grid, GridPhase::FadingIn);

        let ranked: Vec<(TileKey, u64)> = s
            .wall()
            .tiles()
            .iter()
            .map(|tile| (tile.key, s.tile_stagger_delay(tile.key)))
            .collect();
        let max = ranked.iter().map(|&(_, d)| d).max().unwrap();
        assert!(max >= STAGGER_STEP_MS, "expected spread-out delays");

        // Outside fades the delay collapses to zero.
        let _ = settle(&mut s, 16);
        assert_eq!(s.state().grid, GridPhase::Visible);
        assert!(ranked.iter().all(|&(key, _)| s.tile_stagger_delay(key) == 0));
    }

    #[test]
    fn tile_fade_carries_the_stagger_easing() {
        let mut s = session();
        s.frame(0);
        assert_eq!(s.state().grid, GridPhase::FadingIn);

        let fade = s.tile_fade().expect("fade in flight");
        assert_eq!(fade.phase, LayerPhase::Visible);
        assert_eq!(fade.duration_ms, STAGGER_ITEM_FADE_MS);
        assert_eq!(fade.easing, STAGGER_EASING);

        // Outside fades there is nothing to apply.
        let _ = settle(&mut s, 16);
        assert_eq!(s.state().grid, GridPhase::Visible);
        assert!(s.tile_fade().is_none());
    }

    #[test]
    fn unranked_tiles_are_force_hidden_during_fade_out() {
        let mut s = session();
        let now = settle(&mut s, 0);
        s.image_clicked("dunes-img-0", Point::ZERO, now);
        assert_eq!(s.state().grid, GridPhase::FadingOut);

        let off_screen = s
            .wall()
            .tiles()
            .iter()
            .find(|tile| !tile.visible)
            .map(|tile| tile.key);
        if let Some(key) = off_screen {
            assert!(s.tile_force_hidden(key));
        }
    }

    #[test]
    fn drag_events_flow_into_the_wall() {
        let mut s = session();
        let now = settle(&mut s, 0);

        s.pointer_pressed(Point::new(400.0, 300.0), now, PressTarget::Surface);
        s.pointer_moved(Point::new(430.0, 300.0), now + 16);
        assert!(s.is_dragging());
        assert!(s.wall().is_dragging());
        assert_eq!(s.wall().velocity(), Vec2::new(-30.0, 0.0));

        s.pointer_released();
        assert!(!s.wall().is_dragging());
        // Inertia persists past the release.
        assert!(s.wall().velocity().hypot() > 0.0);
    }

    #[test]
    fn preloader_receives_eager_neighbors_on_open() {
        let mut s = session();
        let now = settle(&mut s, 0);
        let rec = RecordingPreloader::default();
        s.set_preloader(Box::new(rec.clone()));
        s.image_clicked("harbors-img-1", Point::ZERO, now);

        let requests = rec.0.borrow();
        // Current, next, previous eagerly; the remaining image when idle.
        assert_eq!(requests.len(), 4);
        assert!(requests[0].0.contains("harbors-asset-1"));
        assert!(requests[1].0.contains("harbors-asset-2"));
        assert!(requests[2].0.contains("harbors-asset-0"));
        assert!(requests[..3].iter().all(|(_, p)| *p == PreloadPriority::Eager));
        assert_eq!(requests[3].1, PreloadPriority::Idle);
        // At DPR 1 a 1280 px viewport preloads the 1800 px variant.
        assert!(requests[0].0.contains("w=1800"));
    }

    #[test]
    fn preload_picks_the_srcset_variant_for_the_device() {
        let all = vec![series("dunes", 3, None)];
        let images = descriptors(&all);
        let mut s = Session::new(
            all,
            images,
            StaticViewport::new(Size::new(1280.0, 800.0)),
            DeviceClass::Pointer,
            CdnResolver::new("https://cdn.example.com"),
            SessionOptions {
                seed: 7,
                device_pixel_ratio: 2.0,
                ..SessionOptions::default()
            },
        );
        let rec = RecordingPreloader::default();
        s.set_preloader(Box::new(rec.clone()));
        let now = settle(&mut s, 0);
        s.image_clicked("dunes-img-0", Point::ZERO, now);

        // 1280 px at DPR 2 needs the 2400 px variant for every request.
        let requests = rec.0.borrow();
        assert!(!requests.is_empty());
        assert!(requests.iter().all(|(url, _)| url.contains("w=2400")));
    }
}
