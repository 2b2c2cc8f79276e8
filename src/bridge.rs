//! Document-level events forwarded from the webview.
//!
//! Keys, mouse-downs, visibility, window resizes and script errors happen on
//! the document and window rather than on any element the page renders, so a
//! small script listens for them and sends each one back as JSON.

use serde::Deserialize;

use lumen_core::{Key, PageEvent, Viewport};

/// Installed once per page; never resolves so the channel stays open.
pub const BRIDGE_JS: &str = r#"
const send = (event) => dioxus.send(event);
const viewport = () => ({ width: window.innerWidth, height: window.innerHeight });

document.addEventListener('visibilitychange', () =>
  send({ kind: 'visibility', visible: !document.hidden }));
window.addEventListener('resize', () => send({ kind: 'resize', ...viewport() }));
document.addEventListener('keydown', (e) => send({
  kind: 'key',
  key: e.key,
  on_action: !!(e.target && e.target.closest && e.target.closest('.btn-action')),
}));
document.addEventListener('mousedown', () => send({ kind: 'pointer_down' }));
window.addEventListener('error', (e) => send({
  kind: 'error',
  message: String(e.message),
  source: e.filename || null,
  line: e.lineno || null,
}));
window.addEventListener('unhandledrejection', (e) =>
  send({ kind: 'error', message: String(e.reason), source: null, line: null }));

send({ kind: 'ready', body: !!document.body, ...viewport() });
await new Promise(() => {});
"#;

/// One message from the bridge script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    Ready {
        body: bool,
        width: f64,
        height: f64,
    },
    Visibility {
        visible: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
    Key {
        key: String,
        on_action: bool,
    },
    PointerDown,
    Error {
        message: String,
        source: Option<String>,
        line: Option<u32>,
    },
}

impl HostEvent {
    /// Events that go to the controller without debouncing.
    pub fn to_page_event(&self) -> Option<PageEvent> {
        match self {
            HostEvent::Visibility { visible } => {
                Some(PageEvent::VisibilityChanged { visible: *visible })
            }
            HostEvent::Key { key, on_action } => Some(PageEvent::KeyDown {
                key: Key::from_dom(key),
                action_focused: *on_action,
            }),
            HostEvent::PointerDown => Some(PageEvent::PointerDown),
            _ => None,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        match self {
            HostEvent::Ready { width, height, .. } | HostEvent::Resize { width, height } => {
                Some(Viewport::new(*width, *height))
            }
            _ => None,
        }
    }
}
