#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::config::SiteConfig;
    use crate::handoff::{LinkOpener, OutboundLink};
    use crate::presentation::PresentationSink;
    use crate::state::lead::{ContactRequest, ProjectType};
    use crate::state::preferences::PreferenceChange;
    use leptos::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct RecordingPresentation {
        changes: Rc<RefCell<Vec<PreferenceChange>>>,
    }

    impl RecordingPresentation {
        pub fn changes(&self) -> Vec<PreferenceChange> {
            self.changes.borrow().clone()
        }
    }

    impl PresentationSink for RecordingPresentation {
        fn apply(&self, change: PreferenceChange) {
            self.changes.borrow_mut().push(change);
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingOpener {
        opened: Rc<RefCell<Vec<OutboundLink>>>,
    }

    impl RecordingOpener {
        pub fn opened(&self) -> Vec<OutboundLink> {
            self.opened.borrow().clone()
        }
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, link: &OutboundLink) {
            self.opened.borrow_mut().push(link.clone());
        }
    }

    pub fn sample_request() -> ContactRequest {
        ContactRequest {
            name: "דנה".into(),
            phone: "0501234567".into(),
            email: "d@x.com".into(),
            message: "רוצה גינה".into(),
            project_type: Some(ProjectType::Garden),
            location: "תל אביב".into(),
        }
    }

    /// Provides recording collaborators in place of the browser ones.
    pub fn provide_recorders() -> (RecordingPresentation, RecordingOpener) {
        let presentation = RecordingPresentation::default();
        let opener = RecordingOpener::default();
        provide_context(SiteConfig::default());
        provide_context::<Rc<dyn PresentationSink>>(Rc::new(presentation.clone()));
        provide_context::<Rc<dyn LinkOpener>>(Rc::new(opener.clone()));
        (presentation, opener)
    }
}
