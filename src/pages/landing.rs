//! Landing page - the animated intro.
//!
//! Every role the page logic needs is registered from `onmounted`; the
//! runtime seals the element cache once the document bridge reports ready.

use dioxus::prelude::*;
use lumen_core::{ElementRole, PageEvent, Point, Size};
use lumen_ui::{ActionButton, NotificationStack, ParticleLayer};

use crate::context::use_page;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let page = use_page();

    use_effect(move || page.start());
    use_drop(move || page.teardown());

    let copy = page.config().copy;
    let view = page.view.read().clone();
    let particles = page.particles.read().iter().cloned().collect::<Vec<_>>();
    let ripples = page.ripples.read().iter().copied().collect::<Vec<_>>();
    let notifications = page.notifications.read().iter().cloned().collect::<Vec<_>>();

    rsx! {
        main {
            class: "page",
            onmousemove: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                page.pointer_moved(Point::new(at.x, at.y));
            },

            ParticleLayer {
                particles,
                onmounted: move |evt: MountedEvent| page.register(ElementRole::ParticleHost, evt),
            }

            div {
                class: "{view.container_class()}",
                style: "{view.container_style()}",
                onmounted: move |evt: MountedEvent| page.register(ElementRole::Container, evt),

                h1 {
                    class: "{view.title_class()}",
                    onmounted: move |evt: MountedEvent| page.register(ElementRole::Title, evt),
                    "{view.title}"
                }

                p {
                    class: "{view.subtitle_class()}",
                    onmounted: move |evt: MountedEvent| page.register(ElementRole::Subtitle, evt),
                    "{copy.subtitle}"
                }

                ActionButton {
                    label: copy.action_label,
                    pressed: view.pressed,
                    revealed: view.action_revealed,
                    ripples,
                    onactivate: move |origin| page.dispatch(PageEvent::Action(origin)),
                    onmeasure: move |size: Size| page.action_resized(size),
                    onmounted: move |evt: MountedEvent| page.register(ElementRole::Action, evt),
                }
            }

            NotificationStack { notifications }
        }
    }
}
