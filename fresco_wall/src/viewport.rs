// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The injected viewport provider.

use kurbo::{Point, Size};

/// Where the wall reads the display surface from.
///
/// Injecting this keeps the physics and virtualization testable without a
/// real surface: the host supplies its window size and pointer position,
/// the tests supply fixed values.
pub trait Viewport {
    /// Current viewport size in px.
    fn size(&self) -> Size;

    /// Current pointer position in viewport coordinates, or `None` when the
    /// pointer has left the surface (or the device has no pointer).
    fn pointer(&self) -> Option<Point>;
}

/// A viewport with externally assigned size and pointer, for hosts that
/// push events rather than expose queryable state (and for tests).
#[derive(Clone, Copy, Debug)]
pub struct StaticViewport {
    /// Viewport size in px.
    pub size: Size,
    /// Pointer position, if on the surface.
    pub pointer: Option<Point>,
}

impl StaticViewport {
    /// Creates a viewport with no pointer on the surface.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pointer: None,
        }
    }
}

impl Viewport for StaticViewport {
    fn size(&self) -> Size {
        self.size
    }

    fn pointer(&self) -> Option<Point> {
        self.pointer
    }
}
