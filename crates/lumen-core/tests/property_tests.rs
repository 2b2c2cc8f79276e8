//! Property-based tests for the page controller rules
//!
//! Uses proptest to check theme cycling, the typewriter, particle generation
//! and debouncing against arbitrary inputs.

use std::time::Duration;

use lumen_core::{
    ActionOrigin, Command, DebounceSlot, Key, PageConfig, PageController, PageEvent, ParticleConfig,
    ParticleField, Typewriter,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Events that move the theme index
#[derive(Debug, Clone, Copy)]
enum ThemeOp {
    Tick,
    Escape,
    Hide,
    Show,
    Action,
    CooldownElapsed,
}

fn theme_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ThemeOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => Just(ThemeOp::Tick),
            1 => Just(ThemeOp::Escape),
            1 => Just(ThemeOp::Hide),
            1 => Just(ThemeOp::Show),
            2 => Just(ThemeOp::Action),
            2 => Just(ThemeOp::CooldownElapsed),
        ],
        0..max_ops,
    )
}

fn particle_config_strategy() -> impl Strategy<Value = ParticleConfig> {
    (0usize..200, 0.5f64..4.0, 0.5f64..10.0, 1.0f64..20.0, 1.0f64..20.0, 0.1f64..10.0).prop_map(
        |(count, size_min, size_span, dur_min, dur_span, delay_max)| ParticleConfig {
            count,
            size_min_px: size_min,
            size_max_px: size_min + size_span,
            duration_min_s: dur_min,
            duration_max_s: dur_min + dur_span,
            delay_max_s: delay_max,
        },
    )
}

fn controller() -> PageController {
    PageController::new(&PageConfig::default()).unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N cycles from index 0 land on N mod palette length
    #[test]
    fn cycles_land_on_n_mod_len(n in 0usize..500) {
        let mut ctrl = controller();
        for _ in 0..n {
            ctrl.cycle_theme();
        }
        prop_assert_eq!(ctrl.theme_index(), n % 5);
    }

    /// Escape always yields index 0 whatever came before
    #[test]
    fn escape_always_resets(ops in theme_ops_strategy(60)) {
        let mut ctrl = controller();
        for op in ops {
            let event = match op {
                ThemeOp::Tick => PageEvent::ThemeTick,
                ThemeOp::Escape => PageEvent::KeyDown { key: Key::Escape, action_focused: false },
                ThemeOp::Hide => PageEvent::VisibilityChanged { visible: false },
                ThemeOp::Show => PageEvent::VisibilityChanged { visible: true },
                ThemeOp::Action => PageEvent::Action(ActionOrigin::Keyboard),
                ThemeOp::CooldownElapsed => PageEvent::CooldownElapsed,
            };
            ctrl.handle(event);
            prop_assert!(ctrl.theme_index() < 5);
        }

        ctrl.handle(PageEvent::KeyDown { key: Key::Escape, action_focused: false });
        prop_assert_eq!(ctrl.theme_index(), 0);
    }

    /// Any number of actions inside one cooldown window is a single step
    #[test]
    fn actions_within_cooldown_step_once(presses in 1usize..20, start in 0usize..5) {
        let mut ctrl = controller();
        for _ in 0..start {
            ctrl.cycle_theme();
        }

        let mut themes_applied = 0;
        for _ in 0..presses {
            themes_applied += ctrl
                .handle(PageEvent::Action(ActionOrigin::Keyboard))
                .iter()
                .filter(|c| matches!(c, Command::ApplyTheme(_)))
                .count();
        }

        prop_assert_eq!(themes_applied, 1);
        prop_assert_eq!(ctrl.theme_index(), (start + 1) % 5);
    }

    /// L chars produce exactly L steps, completion only on the last
    #[test]
    fn typewriter_reveals_every_char(text in "\\PC{0,64}") {
        let frames: Vec<_> = Typewriter::new(text.clone()).collect();
        let len = text.chars().count();

        prop_assert_eq!(frames.len(), len);
        for (i, frame) in frames.iter().enumerate() {
            prop_assert_eq!(frame.step, i + 1);
            prop_assert_eq!(frame.complete, i + 1 == len);
            prop_assert!(text.starts_with(frame.revealed.as_str()));
        }
        if let Some(last) = frames.last() {
            prop_assert_eq!(&last.revealed, &text);
        }
    }

    /// Particle count and ranges follow the config for any seed
    #[test]
    fn particles_respect_config(config in particle_config_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::spawn(&config, &mut rng);
        prop_assert_eq!(field.len(), config.count);

        field.reposition(&mut rng);
        for particle in field.iter() {
            prop_assert!((0.0..=100.0).contains(&particle.x_pct));
            prop_assert!((0.0..=100.0).contains(&particle.y_pct));
            prop_assert!(config.size_range().contains(&particle.size_px));
        }
    }

    /// A burst of pushes fires once, with the last value, and every
    /// superseded deferred call is handed back for cancellation
    #[test]
    fn debounce_burst_fires_last_value(values in prop::collection::vec(any::<i32>(), 1..30)) {
        let mut slot: DebounceSlot<i32, usize> = DebounceSlot::new(Duration::from_millis(250));

        let mut tickets = Vec::new();
        let mut cancelled = Vec::new();
        for (call, value) in values.iter().enumerate() {
            let (ticket, superseded) = slot.push(*value);
            cancelled.extend(superseded);
            prop_assert_eq!(slot.wait(ticket, call), None);
            tickets.push(ticket);
        }
        prop_assert_eq!(cancelled, (0..values.len() - 1).collect::<Vec<_>>());

        let fired: Vec<i32> = tickets.into_iter().filter_map(|t| slot.settle(t)).collect();
        prop_assert_eq!(fired, vec![*values.last().unwrap()]);
        prop_assert!(!slot.has_pending());
    }
}
