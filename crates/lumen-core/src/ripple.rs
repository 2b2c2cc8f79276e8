//! Click ripples on the action button.
//!
//! A ripple is a circle centered on the activation point, sized to cover the
//! whole button. Ripples outlive each other independently and are removed
//! after the ripple duration.

use crate::input::{ActionOrigin, Point, Size};

/// Button size assumed before the first layout measurement arrives.
pub const FALLBACK_ACTION_SIZE: Size = Size {
    width: 160.0,
    height: 48.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RippleId(pub u64);

/// One expanding circle, in element-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub center: Point,
    pub diameter: f64,
}

impl Ripple {
    pub fn inline_style(&self) -> String {
        let radius = self.diameter / 2.0;
        format!(
            "width: {d:.1}px; height: {d:.1}px; left: {l:.1}px; top: {t:.1}px;",
            d = self.diameter,
            l = self.center.x - radius,
            t = self.center.y - radius,
        )
    }
}

/// Live ripples on the action element.
#[derive(Debug, Clone, Default)]
pub struct RippleSet {
    next_id: u64,
    live: Vec<Ripple>,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where a ripple for `origin` is centered on an element of `size`.
    ///
    /// Pointer activations use the pointer position; keyboard activations
    /// use the element center.
    pub fn center_for(origin: ActionOrigin, size: Size) -> Point {
        match origin {
            ActionOrigin::Pointer(point) => point,
            ActionOrigin::Keyboard => Point {
                x: size.width / 2.0,
                y: size.height / 2.0,
            },
        }
    }

    pub fn spawn(&mut self, origin: ActionOrigin, size: Size) -> Ripple {
        let ripple = Ripple {
            id: RippleId(self.next_id),
            center: Self::center_for(origin, size),
            diameter: size.width.max(size.height),
        };
        self.next_id += 1;
        self.live.push(ripple);
        ripple
    }

    pub fn remove(&mut self, id: RippleId) -> bool {
        let before = self.live.len();
        self.live.retain(|r| r.id != id);
        self.live.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
