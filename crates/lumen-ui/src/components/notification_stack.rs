//! Notification Stack
//!
//! Toasts stacked in the corner, oldest on top. The `show` class drives the
//! slide-in; removing it plays the fade-out before the runtime drops the
//! entry.

use dioxus::prelude::*;
use lumen_core::Notification;

#[component]
pub fn NotificationStack(notifications: Vec<Notification>) -> Element {
    rsx! {
        div {
            class: "notification-stack",
            "aria-live": "polite",

            for notification in notifications.iter() {
                div {
                    key: "{notification.id.0}",
                    class: "{notification.stage.css_class()}",
                    role: "status",
                    "{notification.message}"
                }
            }
        }
    }
}
