//! End-to-end controller scenarios against a recording display.
//!
//! `FakePage` applies commands the way the webview runtime does, but into
//! plain fields, so whole interaction sequences can be asserted.

use std::time::Duration;

use lumen_core::{
    ActionOrigin, Command, ElementCache, ElementRole, EntranceAction, EntranceScript, Key,
    NotificationCenter, PageConfig, PageController, PageError, PageEvent, ParallaxOffset, Point,
    RippleSet, Size, Theme, Typewriter,
};

#[derive(Default)]
struct FakePage {
    theme: Option<Theme>,
    pulses: usize,
    ripples: RippleSet,
    notifications: NotificationCenter,
    pending_cooldowns: Vec<Duration>,
    parallax: ParallaxOffset,
    paused: bool,
    keyboard_navigation: bool,
    repositions: usize,
}

impl FakePage {
    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ApplyTheme(theme) => self.theme = Some(theme),
                Command::Pulse => self.pulses += 1,
                Command::Ripple { origin, element } => {
                    self.ripples.spawn(origin, element);
                }
                Command::Notify(message) => {
                    self.notifications.push(message);
                }
                Command::ScheduleCooldownRelease(delay) => self.pending_cooldowns.push(delay),
                Command::SetParallax(offset) => self.parallax = offset,
                Command::SetAnimationsPaused(paused) => self.paused = paused,
                Command::SetKeyboardNavigation(on) => self.keyboard_navigation = on,
                Command::RepositionParticles => self.repositions += 1,
            }
        }
    }

    /// Deliver every scheduled cooldown release.
    fn release_cooldowns(&mut self, ctrl: &mut PageController) {
        for _ in self.pending_cooldowns.drain(..) {
            ctrl.handle(PageEvent::CooldownElapsed);
        }
    }
}

fn ready_cache() -> ElementCache<&'static str> {
    let mut cache = ElementCache::new();
    cache.register(ElementRole::Container, "main.container");
    cache.register(ElementRole::Title, "h1.title");
    cache.register(ElementRole::Action, "button.cta");
    cache
}

#[test]
fn initialization_fails_without_title() {
    let mut cache = ElementCache::new();
    cache.register(ElementRole::Container, "main.container");

    let err = cache.seal().unwrap_err();
    assert!(matches!(err, PageError::MissingElement(ElementRole::Title)));
}

#[test]
fn full_session() {
    let config = PageConfig::default();
    let mut cache = ready_cache();
    cache.seal().unwrap();
    assert!(cache.get(ElementRole::Subtitle).is_none());

    let mut ctrl = PageController::new(&config).unwrap();
    let mut page = FakePage::default();
    page.apply(ctrl.start());
    assert_eq!(page.theme.as_ref().unwrap().name, "aurora");

    // Click twice quickly: one step, one ripple, one notification.
    let click = PageEvent::Action(ActionOrigin::Pointer(Point::new(12.0, 8.0)));
    let first = ctrl.handle(click);
    page.apply(first);
    page.apply(ctrl.handle(click));
    assert_eq!(page.pulses, 1);
    assert_eq!(page.ripples.len(), 1);
    assert_eq!(page.notifications.len(), 1);
    assert_eq!(page.theme.as_ref().unwrap().name, "sunset");
    assert_eq!(page.pending_cooldowns, vec![config.timings.cooldown()]);

    // Periodic tick is held off during the cooldown, then proceeds.
    page.apply(ctrl.handle(PageEvent::ThemeTick));
    assert_eq!(ctrl.theme_index(), 1);
    page.release_cooldowns(&mut ctrl);
    page.apply(ctrl.handle(PageEvent::ThemeTick));
    assert_eq!(page.theme.as_ref().unwrap().name, "ocean");

    // Keyboard user tabs to the button and presses Enter.
    page.apply(ctrl.handle(PageEvent::KeyDown {
        key: Key::Tab,
        action_focused: false,
    }));
    assert!(page.keyboard_navigation);
    page.apply(ctrl.handle(PageEvent::KeyDown {
        key: Key::Enter,
        action_focused: true,
    }));
    assert_eq!(ctrl.theme_index(), 3);
    assert_eq!(page.ripples.len(), 2);
    assert_eq!(page.notifications.len(), 2);

    // Mouse returns: marker cleared. Escape: back to the first theme.
    page.apply(ctrl.handle(PageEvent::PointerDown));
    assert!(!page.keyboard_navigation);
    page.apply(ctrl.handle(PageEvent::KeyDown {
        key: Key::Escape,
        action_focused: false,
    }));
    assert_eq!(page.theme.as_ref().unwrap().name, "aurora");

    // Hidden page: paused, ticks ignored.
    page.apply(ctrl.handle(PageEvent::VisibilityChanged { visible: false }));
    assert!(page.paused);
    page.release_cooldowns(&mut ctrl);
    page.apply(ctrl.handle(PageEvent::ThemeTick));
    assert_eq!(ctrl.theme_index(), 0);
    page.apply(ctrl.handle(PageEvent::VisibilityChanged { visible: true }));
    assert!(!page.paused);

    // Resize and pointer movement.
    page.apply(ctrl.handle(PageEvent::Resized(Size::new(1280.0, 720.0))));
    page.apply(ctrl.handle(PageEvent::PointerMoved {
        pointer: Point::new(1280.0, 360.0),
        viewport: Size::new(1280.0, 720.0),
    }));
    assert_eq!(page.repositions, 1);
    assert_eq!(page.parallax, ParallaxOffset { dx: 10.0, dy: 0.0 });
}

#[test]
fn entrance_and_typewriter_line_up() {
    let config = PageConfig::default();
    let script = EntranceScript::from_timings(&config.timings);

    let start = script
        .steps()
        .iter()
        .find(|s| s.action == EntranceAction::StartTypewriter)
        .unwrap();
    assert_eq!(start.at, config.timings.typewriter_start());

    let mut writer = Typewriter::new(config.copy.title.clone());
    let mut ticks = 0;
    let mut completed_at = None;
    while let Some(frame) = writer.tick() {
        ticks += 1;
        if frame.complete {
            completed_at = Some(ticks);
        }
    }
    assert_eq!(ticks, config.copy.title.chars().count());
    assert_eq!(completed_at, Some(ticks));
    assert_eq!(writer.revealed(), config.copy.title);
}

#[test]
fn custom_palette_cycles_its_own_length() {
    let config = PageConfig::from_json(
        r##"{"palette": [
            {"name": "mono", "primary": "#000", "secondary": "#444", "accent": "#888"},
            {"name": "paper", "primary": "#fff", "secondary": "#eee", "accent": "#ddd"}
        ]}"##,
    )
    .unwrap();
    let mut ctrl = PageController::new(&config).unwrap();

    for _ in 0..3 {
        ctrl.cycle_theme();
    }
    assert_eq!(ctrl.theme_index(), 1);
    assert_eq!(ctrl.current_theme().name, "paper");
}
