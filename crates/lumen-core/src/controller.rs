//! Page controller: the single owner of page state.
//!
//! `handle` decides what a [`PageEvent`] means and returns the [`Command`]s
//! the runtime must apply to the page. Nothing here touches the display, so
//! every rule of the page can be exercised in plain unit tests.

use std::time::Duration;

use crate::config::PageConfig;
use crate::error::PageResult;
use crate::input::{ActionOrigin, Key, PageEvent, Size};
use crate::parallax::ParallaxOffset;
use crate::ripple::FALLBACK_ACTION_SIZE;
use crate::theme::{Theme, ThemeCycler, ThemePalette};

/// A visual change the runtime must apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Write the theme's colors into the page-global style variables
    ApplyTheme(Theme),
    /// Brief scale-down/scale-up on the action element
    Pulse,
    /// Ripple on the action element
    Ripple { origin: ActionOrigin, element: Size },
    /// Show a transient notification
    Notify(String),
    /// Deliver `PageEvent::CooldownElapsed` after this delay
    ScheduleCooldownRelease(Duration),
    /// Translate the container
    SetParallax(ParallaxOffset),
    /// Pause or resume every running animation
    SetAnimationsPaused(bool),
    /// Toggle the focus-visibility marker on the body
    SetKeyboardNavigation(bool),
    /// Move the particles to new positions
    RepositionParticles,
}

impl Command {
    /// Event the runtime must feed back after a delay, if any.
    pub fn deferred_event(&self) -> Option<(Duration, PageEvent)> {
        match self {
            Command::ScheduleCooldownRelease(delay) => Some((*delay, PageEvent::CooldownElapsed)),
            _ => None,
        }
    }
}

/// Snapshot of controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub theme_index: usize,
    /// Action cooldown in progress
    pub animating: bool,
    pub visible: bool,
    pub keyboard_navigation: bool,
    pub parallax: ParallaxOffset,
    pub action_size: Option<Size>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            theme_index: 0,
            animating: false,
            visible: true,
            keyboard_navigation: false,
            parallax: ParallaxOffset::default(),
            action_size: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageController {
    themes: ThemeCycler,
    animating: bool,
    visible: bool,
    keyboard_navigation: bool,
    parallax: ParallaxOffset,
    action_size: Option<Size>,
    cooldown: Duration,
    parallax_strength: f64,
}

impl Default for PageController {
    fn default() -> Self {
        Self::from_validated(&PageConfig::default())
    }
}

impl PageController {
    pub fn new(config: &PageConfig) -> PageResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &PageConfig) -> Self {
        Self {
            themes: ThemeCycler::new(config.palette.clone()),
            animating: false,
            visible: true,
            keyboard_navigation: false,
            parallax: ParallaxOffset::default(),
            action_size: None,
            cooldown: config.timings.cooldown(),
            parallax_strength: config.parallax_strength_px,
        }
    }

    pub fn state(&self) -> PageState {
        PageState {
            theme_index: self.themes.index(),
            animating: self.animating,
            visible: self.visible,
            keyboard_navigation: self.keyboard_navigation,
            parallax: self.parallax,
            action_size: self.action_size,
        }
    }

    pub fn theme_index(&self) -> usize {
        self.themes.index()
    }

    pub fn current_theme(&self) -> &Theme {
        self.themes.current()
    }

    pub fn palette(&self) -> &ThemePalette {
        self.themes.palette()
    }

    /// Commands that put the page in its initial visual state.
    pub fn start(&self) -> Vec<Command> {
        vec![Command::ApplyTheme(self.themes.current().clone())]
    }

    /// Decide the effects of one event.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Command> {
        match event {
            PageEvent::Action(origin) => self.activate(origin),
            PageEvent::CooldownElapsed => {
                self.animating = false;
                Vec::new()
            }
            PageEvent::ThemeTick => {
                if !self.visible || self.animating {
                    tracing::trace!(
                        visible = self.visible,
                        animating = self.animating,
                        "Skipping theme tick"
                    );
                    return Vec::new();
                }
                self.cycle_theme()
            }
            PageEvent::KeyDown { key, action_focused } => self.key_down(key, action_focused),
            PageEvent::PointerDown => {
                if self.keyboard_navigation {
                    self.keyboard_navigation = false;
                    vec![Command::SetKeyboardNavigation(false)]
                } else {
                    Vec::new()
                }
            }
            PageEvent::PointerMoved { pointer, viewport } => {
                self.parallax =
                    ParallaxOffset::from_pointer(pointer, viewport, self.parallax_strength);
                vec![Command::SetParallax(self.parallax)]
            }
            PageEvent::Resized(viewport) => {
                tracing::debug!(
                    width = viewport.width,
                    height = viewport.height,
                    "Viewport settled"
                );
                vec![Command::RepositionParticles]
            }
            PageEvent::VisibilityChanged { visible } => {
                self.visible = visible;
                vec![Command::SetAnimationsPaused(!visible)]
            }
            PageEvent::ActionResized(size) => {
                self.action_size = Some(size);
                Vec::new()
            }
        }
    }

    /// Advance to the next theme unconditionally.
    pub fn cycle_theme(&mut self) -> Vec<Command> {
        let theme = self.themes.advance().clone();
        tracing::debug!(index = self.themes.index(), theme = %theme.name, "Theme cycled");
        vec![Command::ApplyTheme(theme)]
    }

    /// Back to the first theme unconditionally.
    pub fn reset_theme(&mut self) -> Vec<Command> {
        let theme = self.themes.reset().clone();
        tracing::debug!(theme = %theme.name, "Theme reset");
        vec![Command::ApplyTheme(theme)]
    }

    /// Apply an arbitrary theme without moving the palette index.
    pub fn apply_theme(&self, theme: Theme) -> PageResult<Vec<Command>> {
        theme.validate()?;
        Ok(vec![Command::ApplyTheme(theme)])
    }

    fn activate(&mut self, origin: ActionOrigin) -> Vec<Command> {
        if self.animating {
            tracing::trace!("Action ignored during cooldown");
            return Vec::new();
        }
        self.animating = true;

        let theme = self.themes.advance().clone();
        let message = format!("Theme changed to {}", theme.name);
        vec![
            Command::Pulse,
            Command::ApplyTheme(theme),
            Command::Ripple {
                origin,
                element: self.action_size.unwrap_or(FALLBACK_ACTION_SIZE),
            },
            Command::Notify(message),
            Command::ScheduleCooldownRelease(self.cooldown),
        ]
    }

    fn key_down(&mut self, key: Key, action_focused: bool) -> Vec<Command> {
        match key {
            Key::Escape => self.reset_theme(),
            Key::Tab if !self.keyboard_navigation => {
                self.keyboard_navigation = true;
                vec![Command::SetKeyboardNavigation(true)]
            }
            Key::Enter | Key::Space if action_focused => self.activate(ActionOrigin::Keyboard),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Point;

    fn controller() -> PageController {
        PageController::new(&PageConfig::default()).unwrap()
    }

    fn themes_in(commands: &[Command]) -> Vec<&Theme> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::ApplyTheme(theme) => Some(theme),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_applies_first_theme() {
        let ctrl = controller();
        let commands = ctrl.start();
        assert_eq!(themes_in(&commands)[0].name, "aurora");
    }

    #[test]
    fn action_runs_effects_in_order() {
        let mut ctrl = controller();
        let origin = ActionOrigin::Pointer(Point::new(3.0, 4.0));
        let commands = ctrl.handle(PageEvent::Action(origin));

        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], Command::Pulse);
        assert!(matches!(&commands[1], Command::ApplyTheme(t) if t.name == "sunset"));
        assert_eq!(
            commands[2],
            Command::Ripple {
                origin,
                element: FALLBACK_ACTION_SIZE
            }
        );
        assert_eq!(commands[3], Command::Notify("Theme changed to sunset".to_string()));
        assert_eq!(
            commands[4],
            Command::ScheduleCooldownRelease(Duration::from_millis(600))
        );
        assert!(ctrl.state().animating);
    }

    #[test]
    fn second_action_within_cooldown_is_ignored() {
        let mut ctrl = controller();
        ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));
        let second = ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));

        assert!(second.is_empty());
        assert_eq!(ctrl.theme_index(), 1);

        ctrl.handle(PageEvent::CooldownElapsed);
        ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));
        assert_eq!(ctrl.theme_index(), 2);
    }

    #[test]
    fn theme_tick_requires_visible_and_idle() {
        let mut ctrl = controller();

        ctrl.handle(PageEvent::VisibilityChanged { visible: false });
        assert!(ctrl.handle(PageEvent::ThemeTick).is_empty());

        ctrl.handle(PageEvent::VisibilityChanged { visible: true });
        ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));
        assert!(ctrl.handle(PageEvent::ThemeTick).is_empty());

        ctrl.handle(PageEvent::CooldownElapsed);
        assert_eq!(themes_in(&ctrl.handle(PageEvent::ThemeTick)).len(), 1);
        assert_eq!(ctrl.theme_index(), 2);
    }

    #[test]
    fn escape_resets_unconditionally() {
        let mut ctrl = controller();
        ctrl.handle(PageEvent::ThemeTick);
        ctrl.handle(PageEvent::ThemeTick);
        ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));

        let commands = ctrl.handle(PageEvent::KeyDown {
            key: Key::Escape,
            action_focused: false,
        });
        assert_eq!(ctrl.theme_index(), 0);
        assert_eq!(themes_in(&commands)[0].name, "aurora");
    }

    #[test]
    fn enter_activates_only_when_action_focused() {
        let mut ctrl = controller();
        let unfocused = ctrl.handle(PageEvent::KeyDown {
            key: Key::Enter,
            action_focused: false,
        });
        assert!(unfocused.is_empty());

        let focused = ctrl.handle(PageEvent::KeyDown {
            key: Key::Space,
            action_focused: true,
        });
        assert!(focused.contains(&Command::Ripple {
            origin: ActionOrigin::Keyboard,
            element: FALLBACK_ACTION_SIZE,
        }));
    }

    #[test]
    fn ripple_uses_measured_action_size() {
        let mut ctrl = controller();
        let size = Size::new(220.0, 60.0);
        ctrl.handle(PageEvent::ActionResized(size));
        let commands = ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));
        assert!(commands.contains(&Command::Ripple {
            origin: ActionOrigin::Keyboard,
            element: size,
        }));
    }

    #[test]
    fn tab_and_pointer_toggle_keyboard_navigation() {
        let mut ctrl = controller();
        let tab = PageEvent::KeyDown {
            key: Key::Tab,
            action_focused: false,
        };
        assert_eq!(ctrl.handle(tab), vec![Command::SetKeyboardNavigation(true)]);
        assert!(ctrl.handle(tab).is_empty());
        assert_eq!(
            ctrl.handle(PageEvent::PointerDown),
            vec![Command::SetKeyboardNavigation(false)]
        );
        assert!(ctrl.handle(PageEvent::PointerDown).is_empty());
    }

    #[test]
    fn visibility_toggles_pause() {
        let mut ctrl = controller();
        assert_eq!(
            ctrl.handle(PageEvent::VisibilityChanged { visible: false }),
            vec![Command::SetAnimationsPaused(true)]
        );
        assert!(!ctrl.state().visible);
        assert_eq!(
            ctrl.handle(PageEvent::VisibilityChanged { visible: true }),
            vec![Command::SetAnimationsPaused(false)]
        );
    }

    #[test]
    fn pointer_move_sets_parallax() {
        let mut ctrl = controller();
        let commands = ctrl.handle(PageEvent::PointerMoved {
            pointer: Point::new(0.0, 600.0),
            viewport: Size::new(800.0, 600.0),
        });
        assert_eq!(
            commands,
            vec![Command::SetParallax(ParallaxOffset { dx: -10.0, dy: 10.0 })]
        );
    }

    #[test]
    fn resize_repositions_particles() {
        let mut ctrl = controller();
        assert_eq!(
            ctrl.handle(PageEvent::Resized(Size::new(1024.0, 768.0))),
            vec![Command::RepositionParticles]
        );
    }

    #[test]
    fn apply_theme_keeps_index_and_validates() {
        let mut ctrl = controller();
        ctrl.cycle_theme();
        let custom = Theme::new("custom", "#000000", "#ffffff", "#ff0000");
        let commands = ctrl.apply_theme(custom.clone()).unwrap();
        assert_eq!(commands, vec![Command::ApplyTheme(custom)]);
        assert_eq!(ctrl.theme_index(), 1);

        assert!(ctrl
            .apply_theme(Theme::new(
                "broken",
                "rgb(0,0,0); } body { display: none } :root { --x: rgb(0)",
                "#fff",
                "#000"
            ))
            .is_err());
    }

    #[test]
    fn only_cooldown_release_is_deferred() {
        let mut ctrl = controller();
        let commands = ctrl.handle(PageEvent::Action(ActionOrigin::Keyboard));
        let deferred: Vec<_> = commands.iter().filter_map(Command::deferred_event).collect();
        assert_eq!(
            deferred,
            vec![(Duration::from_millis(600), PageEvent::CooldownElapsed)]
        );
    }

    #[test]
    fn apply_theme_accepts_named_colors() {
        let ctrl = controller();
        let plain = Theme::new("plain", "red", "white", "rebeccapurple");
        let commands = ctrl.apply_theme(plain.clone()).unwrap();
        assert_eq!(commands, vec![Command::ApplyTheme(plain)]);
        assert_eq!(ctrl.theme_index(), 0);
    }
}
