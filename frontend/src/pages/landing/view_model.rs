use crate::config::{self, SiteConfig};
use crate::device::{direct_contact_link, use_device_kind, DeviceKind};
use crate::handoff::{mail_url, BrowserLinkOpener, LinkOpener, OutboundLink};
use crate::presentation::{DocumentRoot, PresentationSink};
use crate::state::lead::LeadStore;
use crate::state::preferences::PreferencesStore;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct LandingViewModel {
    pub config: SiteConfig,
    pub preferences: PreferencesStore,
    pub lead: LeadStore,
    pub device: Signal<DeviceKind>,
    opener: Rc<dyn LinkOpener>,
}

impl LandingViewModel {
    pub fn direct_contact_link(&self) -> OutboundLink {
        direct_contact_link(self.device.get_untracked(), &self.config)
    }

    pub fn open_direct_contact(&self) {
        let link = self.direct_contact_link();
        log::info!("opening direct contact via {}", link.url.split(':').next().unwrap_or_default());
        self.opener.open(&link);
    }

    pub fn mail_href(&self) -> String {
        mail_url(&self.config)
    }
}

/// Builds the page state from context, falling back to the browser
/// collaborators when none were provided.
pub fn use_landing_view_model() -> LandingViewModel {
    let config = use_context::<SiteConfig>().unwrap_or_else(config::current);
    let presentation = use_context::<Rc<dyn PresentationSink>>()
        .unwrap_or_else(|| Rc::new(DocumentRoot) as Rc<dyn PresentationSink>);
    let opener = use_context::<Rc<dyn LinkOpener>>()
        .unwrap_or_else(|| Rc::new(BrowserLinkOpener) as Rc<dyn LinkOpener>);

    let preferences = PreferencesStore::new(presentation);
    preferences.sync();
    let lead = LeadStore::new(config.clone(), opener.clone());
    let device = use_device_kind();

    LandingViewModel {
        config,
        preferences,
        lead,
        device,
        opener,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::handoff::LinkTarget;
    use crate::state::preferences::{PreferenceChange, PreferenceIntent};
    use crate::test_support::helpers::provide_recorders;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_from_defaults_and_syncs_presentation() {
        with_runtime(|| {
            let (presentation, _opener) = provide_recorders();
            let vm = use_landing_view_model();
            assert_eq!(presentation.changes().len(), 3);
            assert!(vm.lead.request().get_untracked().is_empty());
            assert_eq!(vm.device.get_untracked(), DeviceKind::Desktop);
        });
    }

    #[test]
    fn direct_contact_on_desktop_opens_dialer() {
        with_runtime(|| {
            let (_presentation, opener) = provide_recorders();
            let vm = use_landing_view_model();
            vm.open_direct_contact();
            let opened = opener.opened();
            assert_eq!(opened.len(), 1);
            assert_eq!(opened[0].url, "tel:+972542001104");
            assert_eq!(opened[0].target, LinkTarget::SameContext);
        });
    }

    #[test]
    fn preferences_reach_the_provided_sink() {
        with_runtime(|| {
            let (presentation, _opener) = provide_recorders();
            let vm = use_landing_view_model();
            vm.preferences.dispatch(PreferenceIntent::ToggleContrast);
            assert_eq!(
                presentation.changes().last(),
                Some(&PreferenceChange::HighContrast(true))
            );
        });
    }

    #[test]
    fn mail_href_uses_configured_address() {
        with_runtime(|| {
            provide_recorders();
            let vm = use_landing_view_model();
            assert_eq!(vm.mail_href(), "mailto:primo.gan.ltd@gmail.com");
        });
    }
}
