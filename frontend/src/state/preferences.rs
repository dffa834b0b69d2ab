use crate::presentation::PresentationSink;
use leptos::*;
use std::rc::Rc;

/// Root text scale, kept in tenths so repeated steps land exactly on 0.8..=2.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextScale(u8);

impl TextScale {
    pub const MIN: TextScale = TextScale(8);
    pub const MAX: TextScale = TextScale(20);

    pub fn from_tenths(tenths: u8) -> Self {
        TextScale(tenths.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    pub fn factor(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    pub fn css_font_size(&self) -> String {
        format!("{}rem", self.factor())
    }

    pub fn increased(&self) -> Option<TextScale> {
        (*self < Self::MAX).then(|| TextScale(self.0 + 1))
    }

    pub fn decreased(&self) -> Option<TextScale> {
        (*self > Self::MIN).then(|| TextScale(self.0 - 1))
    }
}

impl Default for TextScale {
    fn default() -> Self {
        TextScale(10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceIntent {
    IncreaseTextScale,
    DecreaseTextScale,
    ToggleContrast,
    ToggleTheme,
    ToggleToolbar,
}

/// A change the page must reflect on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    TextScale(TextScale),
    HighContrast(bool),
    DarkTheme(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceState {
    pub text_scale: TextScale,
    pub high_contrast: bool,
    pub dark_theme: bool,
    pub toolbar_open: bool,
}

impl PreferenceState {
    /// Applies `intent` and returns the change to publish, if any. Scale steps
    /// past either bound and toolbar toggles publish nothing.
    pub fn apply(&mut self, intent: PreferenceIntent) -> Option<PreferenceChange> {
        match intent {
            PreferenceIntent::IncreaseTextScale => self.text_scale.increased().map(|scale| {
                self.text_scale = scale;
                PreferenceChange::TextScale(scale)
            }),
            PreferenceIntent::DecreaseTextScale => self.text_scale.decreased().map(|scale| {
                self.text_scale = scale;
                PreferenceChange::TextScale(scale)
            }),
            PreferenceIntent::ToggleContrast => {
                self.high_contrast = !self.high_contrast;
                Some(PreferenceChange::HighContrast(self.high_contrast))
            }
            PreferenceIntent::ToggleTheme => {
                self.dark_theme = !self.dark_theme;
                Some(PreferenceChange::DarkTheme(self.dark_theme))
            }
            PreferenceIntent::ToggleToolbar => {
                self.toolbar_open = !self.toolbar_open;
                None
            }
        }
    }

    pub fn changes(&self) -> [PreferenceChange; 3] {
        [
            PreferenceChange::TextScale(self.text_scale),
            PreferenceChange::HighContrast(self.high_contrast),
            PreferenceChange::DarkTheme(self.dark_theme),
        ]
    }
}

#[derive(Clone)]
pub struct PreferencesStore {
    state: RwSignal<PreferenceState>,
    presentation: Rc<dyn PresentationSink>,
}

impl PreferencesStore {
    pub fn new(presentation: Rc<dyn PresentationSink>) -> Self {
        Self {
            state: create_rw_signal(PreferenceState::default()),
            presentation,
        }
    }

    pub fn state(&self) -> Signal<PreferenceState> {
        self.state.into()
    }

    pub fn dispatch(&self, intent: PreferenceIntent) {
        let mut change = None;
        self.state.update(|state| change = state.apply(intent));
        match change {
            Some(change) => {
                log::debug!("preference changed: {:?}", change);
                self.presentation.apply(change);
            }
            None => log::trace!("preference intent {:?} published nothing", intent),
        }
    }

    /// Pushes every current value to the presentation sink.
    pub fn sync(&self) {
        for change in self.state.get_untracked().changes() {
            self.presentation.apply(change);
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::RecordingPresentation, ssr::with_runtime};

    #[test]
    fn dispatch_notifies_presentation_once_per_change() {
        with_runtime(|| {
            let sink = RecordingPresentation::default();
            let store = PreferencesStore::new(Rc::new(sink.clone()));

            store.dispatch(PreferenceIntent::ToggleTheme);
            store.dispatch(PreferenceIntent::ToggleToolbar);
            store.dispatch(PreferenceIntent::IncreaseTextScale);

            assert_eq!(
                sink.changes(),
                vec![
                    PreferenceChange::DarkTheme(true),
                    PreferenceChange::TextScale(TextScale::from_tenths(11)),
                ]
            );
            let state = store.state().get_untracked();
            assert!(state.dark_theme && state.toolbar_open);
        });
    }

    #[test]
    fn bound_noops_do_not_notify() {
        with_runtime(|| {
            let sink = RecordingPresentation::default();
            let store = PreferencesStore::new(Rc::new(sink.clone()));
            for _ in 0..2 {
                store.dispatch(PreferenceIntent::DecreaseTextScale);
            }
            store.dispatch(PreferenceIntent::DecreaseTextScale);
            assert_eq!(sink.changes().len(), 2);
            assert_eq!(store.state().get_untracked().text_scale, TextScale::MIN);
        });
    }

    #[test]
    fn sync_publishes_full_state() {
        with_runtime(|| {
            let sink = RecordingPresentation::default();
            let store = PreferencesStore::new(Rc::new(sink.clone()));
            store.sync();
            assert_eq!(sink.changes(), PreferenceState::default().changes().to_vec());
        });
    }
}
