use crate::error::SiteError;
use crate::state::preferences::{PreferenceChange, PreferenceState};
use crate::utils::dom;

pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const DARK_CLASS: &str = "dark";

/// Receives preference changes and reflects them in the page's global styling.
pub trait PresentationSink {
    fn apply(&self, change: PreferenceChange);
}

/// Writes preference markers onto `<html>`: the root `font-size` plus the
/// `high-contrast` and `dark` classes consumed by the stylesheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    pub fn try_apply(&self, change: PreferenceChange) -> Result<(), SiteError> {
        let root = dom::document_root()?;
        match change {
            PreferenceChange::TextScale(scale) => root
                .style()
                .set_property("font-size", &scale.css_font_size())
                .map_err(|_| SiteError::dom("failed to set root font-size")),
            PreferenceChange::HighContrast(enabled) => {
                toggle_class(&root, HIGH_CONTRAST_CLASS, enabled)
            }
            PreferenceChange::DarkTheme(enabled) => toggle_class(&root, DARK_CLASS, enabled),
        }
    }
}

fn toggle_class(root: &web_sys::HtmlElement, class: &str, enabled: bool) -> Result<(), SiteError> {
    let list = root.class_list();
    let result = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    result.map_err(|_| SiteError::dom(format!("failed to toggle `{}` on root", class)))
}

impl PresentationSink for DocumentRoot {
    fn apply(&self, change: PreferenceChange) {
        if let Err(err) = self.try_apply(change) {
            log::warn!("could not apply {:?}: {}", change, err);
        }
    }
}

/// Class markers for the page wrapper, mirroring what the root receives.
pub fn root_class_names(state: &PreferenceState) -> String {
    let mut classes = Vec::with_capacity(2);
    if state.high_contrast {
        classes.push(HIGH_CONTRAST_CLASS);
    }
    if state.dark_theme {
        classes.push(DARK_CLASS);
    }
    classes.join(" ")
}
