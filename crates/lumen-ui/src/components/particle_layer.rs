//! Particle Layer
//!
//! Ambient background of floating dots. Each particle is positioned in
//! percent of the host so the field survives any viewport size; the `float`
//! keyframes loop forever with per-particle duration and delay.

use dioxus::prelude::*;
use lumen_core::Particle;

/// Properties for the ParticleLayer component
#[derive(Clone, PartialEq, Props)]
pub struct ParticleLayerProps {
    pub particles: Vec<Particle>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Renders the particle host and its particles
///
/// Particles are keyed by id, so a reposition only updates inline styles and
/// the running animations continue.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ParticleLayer { particles: field().iter().cloned().collect::<Vec<_>>() }
/// }
/// ```
#[component]
pub fn ParticleLayer(props: ParticleLayerProps) -> Element {
    let onmounted = props.onmounted;

    rsx! {
        div {
            class: "particles",
            "aria-hidden": "true",
            onmounted: move |evt: MountedEvent| {
                if let Some(handler) = onmounted {
                    handler.call(evt);
                }
            },

            for particle in props.particles.iter() {
                div {
                    key: "{particle.id}",
                    class: "particle",
                    style: "{particle.inline_style()}",
                }
            }
        }
    }
}
