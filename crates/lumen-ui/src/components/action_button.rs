//! Action Button
//!
//! The page's single call to action. Renders the pulse and ripple feedback it
//! is given and reports activations with their origin:
//! - pointer clicks carry element-relative coordinates
//! - Space/Enter are reported by the page-level key handler, so the button
//!   only suppresses the native click for them

use dioxus::prelude::*;
use lumen_core::{ActionOrigin, Key, Point, Ripple, Size};

/// Properties for the ActionButton component
#[derive(Clone, PartialEq, Props)]
pub struct ActionButtonProps {
    pub label: String,
    /// Scale-down phase of the pulse
    #[props(default = false)]
    pub pressed: bool,
    /// Whether the entrance fade has started
    #[props(default = false)]
    pub revealed: bool,
    /// Live ripples, drawn inside the button
    #[props(default)]
    pub ripples: Vec<Ripple>,
    pub onactivate: EventHandler<ActionOrigin>,
    #[props(default)]
    pub onmeasure: Option<EventHandler<Size>>,
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// CSS class list for the button in a given feedback state.
pub fn action_button_class(pressed: bool, revealed: bool) -> String {
    let mut class = String::from("btn-action");
    if revealed {
        class.push_str(" fadeInUp");
    }
    if pressed {
        class.push_str(" pulse");
    }
    class
}

/// Call-to-action button with ripple feedback
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ActionButton {
///         label: "Shift the colors".to_string(),
///         ripples: ripples().iter().copied().collect::<Vec<_>>(),
///         onactivate: move |origin| runtime.dispatch(PageEvent::Action(origin)),
///     }
/// }
/// ```
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let class = action_button_class(props.pressed, props.revealed);
    let onactivate = props.onactivate;
    let onmeasure = props.onmeasure;
    let onmounted = props.onmounted;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |evt: MouseEvent| {
                let at = evt.element_coordinates();
                onactivate.call(ActionOrigin::Pointer(Point::new(at.x, at.y)));
            },
            onkeydown: move |evt: KeyboardEvent| {
                if Key::from_dom(&evt.key().to_string()).activates() {
                    evt.prevent_default();
                }
            },
            onresize: move |evt: ResizeEvent| {
                if let (Some(handler), Ok(size)) = (onmeasure, evt.get_border_box_size()) {
                    handler.call(Size::new(size.width, size.height));
                }
            },
            onmounted: move |evt: MountedEvent| {
                if let Some(handler) = onmounted {
                    handler.call(evt);
                }
            },

            span { class: "btn-action-label", "{props.label}" }

            for ripple in props.ripples.iter() {
                span {
                    key: "{ripple.id.0}",
                    class: "ripple",
                    style: "{ripple.inline_style()}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_reflects_feedback_state() {
        assert_eq!(action_button_class(false, false), "btn-action");
        assert_eq!(action_button_class(false, true), "btn-action fadeInUp");
        assert_eq!(action_button_class(true, true), "btn-action fadeInUp pulse");
    }
}
