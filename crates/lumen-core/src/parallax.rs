//! Pointer-driven parallax offset for the page container.

use crate::input::{Point, Viewport};

/// Container translation in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub dx: f64,
    pub dy: f64,
}

impl ParallaxOffset {
    /// Offset proportional to the pointer's distance from the viewport center.
    ///
    /// At the center the offset is zero; at an edge it is `±strength / 2`.
    /// A degenerate viewport yields no offset.
    pub fn from_pointer(pointer: Point, viewport: Viewport, strength: f64) -> Self {
        if viewport.is_empty() {
            return Self::default();
        }
        Self {
            dx: (pointer.x / viewport.width - 0.5) * strength,
            dy: (pointer.y / viewport.height - 0.5) * strength,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.dx, self.dy)
    }
}
