//! One-shot entrance sequence, expressed as timed steps.
//!
//! The runtime schedules each step at its offset from initialization. The
//! typewriter step only starts the reveal; the per-character ticks are driven
//! by the typewriter interval.

use std::time::Duration;

use crate::config::Timings;
use crate::elements::ElementRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceAction {
    /// Container goes from hidden/offset to visible/aligned
    RevealContainer,
    /// Title starts revealing character by character
    StartTypewriter,
    /// Generic fade-and-rise on an element
    FadeInUp(ElementRole),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceStep {
    /// Offset from initialization
    pub at: Duration,
    pub action: EntranceAction,
}

/// Ordered entrance steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntranceScript {
    steps: Vec<EntranceStep>,
}

impl EntranceScript {
    pub fn from_timings(timings: &Timings) -> Self {
        let mut steps = vec![
            EntranceStep {
                at: timings.frame(),
                action: EntranceAction::RevealContainer,
            },
            EntranceStep {
                at: timings.typewriter_start(),
                action: EntranceAction::StartTypewriter,
            },
            EntranceStep {
                at: timings.subtitle_delay(),
                action: EntranceAction::FadeInUp(ElementRole::Subtitle),
            },
            EntranceStep {
                at: timings.action_delay(),
                action: EntranceAction::FadeInUp(ElementRole::Action),
            },
        ];
        steps.sort_by_key(|step| step.at);
        Self { steps }
    }

    pub fn steps(&self) -> &[EntranceStep] {
        &self.steps
    }

    /// Offset of the last step.
    pub fn duration(&self) -> Duration {
        self.steps.last().map(|s| s.at).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_order() {
        let script = EntranceScript::from_timings(&Timings::default());
        let actions: Vec<_> = script.steps().iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![
                EntranceAction::RevealContainer,
                EntranceAction::StartTypewriter,
                EntranceAction::FadeInUp(ElementRole::Subtitle),
                EntranceAction::FadeInUp(ElementRole::Action),
            ]
        );
        assert_eq!(script.duration(), Duration::from_millis(2000));
    }

    #[test]
    fn steps_sorted_by_offset() {
        let timings = Timings {
            subtitle_delay_ms: 3000,
            action_delay_ms: 1000,
            ..Timings::default()
        };
        let script = EntranceScript::from_timings(&timings);
        let offsets: Vec<_> = script.steps().iter().map(|s| s.at).collect();
        let mut sorted = offsets.clone();
        sorted.sort();
        assert_eq!(offsets, sorted);
        assert_eq!(
            script.steps()[2].action,
            EntranceAction::FadeInUp(ElementRole::Action)
        );
    }
}
