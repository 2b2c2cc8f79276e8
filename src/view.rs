//! Render state of the intro page.
//!
//! Everything the landing page draws that is not owned by a core collection
//! (particles, ripples, notifications) lives here, along with the class and
//! style strings derived from it.

use lumen_core::ParallaxOffset;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    /// Container has played its entrance transition
    pub entered: bool,
    /// Title text revealed so far
    pub title: String,
    pub title_complete: bool,
    pub subtitle_revealed: bool,
    pub action_revealed: bool,
    /// Scale-down phase of the action pulse
    pub pressed: bool,
    pub parallax: ParallaxOffset,
}

impl PageView {
    pub fn container_class(&self) -> &'static str {
        if self.entered {
            "container entered"
        } else {
            "container"
        }
    }

    /// Inline transform for the container.
    ///
    /// Empty until the entrance has played so the entrance transform is not
    /// overridden mid-transition.
    pub fn container_style(&self) -> String {
        if self.entered {
            format!("transform: {};", self.parallax.transform())
        } else {
            String::new()
        }
    }

    pub fn title_class(&self) -> &'static str {
        if self.title_complete {
            "title typewriter-complete"
        } else {
            "title"
        }
    }

    pub fn subtitle_class(&self) -> &'static str {
        if self.subtitle_revealed {
            "subtitle fadeInUp"
        } else {
            "subtitle"
        }
    }
}
