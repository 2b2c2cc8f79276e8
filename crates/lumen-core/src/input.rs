//! Input sources the page controller reacts to.

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The visible window area.
pub type Viewport = Size;

/// Keys the page cares about; everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }

    /// Keys that activate a focused button.
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// How the action element was triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOrigin {
    /// Pointer click, coordinates relative to the element
    Pointer(Point),
    /// Space/Enter while the element has focus
    Keyboard,
}

/// Everything that can drive the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// The action element was activated
    Action(ActionOrigin),
    /// The action cooldown window ended
    CooldownElapsed,
    /// The periodic theme timer fired
    ThemeTick,
    /// A key went down anywhere on the page
    KeyDown { key: Key, action_focused: bool },
    /// A mouse button went down anywhere on the page
    PointerDown,
    /// Settled pointer position after debouncing
    PointerMoved { pointer: Point, viewport: Viewport },
    /// Settled viewport size after debouncing
    Resized(Viewport),
    /// The page became visible or hidden
    VisibilityChanged { visible: bool },
    /// The action element was laid out at a new size
    ActionResized(Size),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map() {
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom("Tab"), Key::Tab);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Tab.activates());
        assert!(!Key::Escape.activates());
    }
}
