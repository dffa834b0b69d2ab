use crate::config::SiteConfig;
use crate::handoff::{messaging_url, telephone_url, LinkTarget, OutboundLink};
use crate::utils::dom;
use leptos::*;

const MOBILE_AGENT_MARKERS: &[&str] = &["iphone", "ipad", "ipod", "android"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceKind {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceKind {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let agent = user_agent.to_ascii_lowercase();
        if MOBILE_AGENT_MARKERS.iter().any(|marker| agent.contains(marker)) {
            DeviceKind::Mobile
        } else {
            DeviceKind::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceKind::Mobile)
    }
}

/// Mobile visitors get the messaging app, everyone else the dialer.
pub fn direct_contact_link(kind: DeviceKind, config: &SiteConfig) -> OutboundLink {
    match kind {
        DeviceKind::Mobile => OutboundLink::new(messaging_url(config, None), LinkTarget::SameContext),
        DeviceKind::Desktop => OutboundLink::new(telephone_url(config), LinkTarget::SameContext),
    }
}

fn detect_current() -> DeviceKind {
    match dom::user_agent() {
        Ok(agent) => DeviceKind::from_user_agent(&agent),
        Err(err) => {
            log::debug!("user agent unavailable ({}), assuming desktop", err);
            DeviceKind::Desktop
        }
    }
}

/// Runs `handler` on every window resize until the current owner is disposed.
pub fn watch_resize(handler: impl Fn() + 'static) {
    let handle = window_event_listener(ev::resize, move |_| handler());
    on_cleanup(move || handle.remove());
}

/// Device kind for the current page, re-evaluated on every window resize.
pub fn use_device_kind() -> Signal<DeviceKind> {
    let (kind, set_kind) = create_signal(detect_current());
    watch_resize(move || {
        let detected = detect_current();
        if kind.get_untracked() != detected {
            set_kind.set(detected);
        }
    });
    kind.into()
}
