use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::lead::{ContactField, ContactRequest};
use crate::utils::{dom, encoding::encode_uri_component};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// `window.open(url, "_blank")`
    NewContext,
    /// `location.href = url`
    SameContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLink {
    pub url: String,
    pub target: LinkTarget,
}

impl OutboundLink {
    pub fn new(url: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            url: url.into(),
            target,
        }
    }
}

/// Hands a link to the browser. Fire-and-forget: nothing is reported back.
pub trait LinkOpener {
    fn open(&self, link: &OutboundLink);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLinkOpener;

impl BrowserLinkOpener {
    pub fn try_open(&self, link: &OutboundLink) -> Result<(), SiteError> {
        let window = dom::window()?;
        match link.target {
            LinkTarget::NewContext => window
                .open_with_url_and_target(&link.url, "_blank")
                .map(|_| ())
                .map_err(|_| SiteError::dom("window.open failed")),
            LinkTarget::SameContext => window
                .location()
                .set_href(&link.url)
                .map_err(|_| SiteError::dom("location.href assignment failed")),
        }
    }
}

impl LinkOpener for BrowserLinkOpener {
    fn open(&self, link: &OutboundLink) {
        if let Err(err) = self.try_open(link) {
            log::warn!("could not open outbound link: {}", err);
        }
    }
}

pub fn compose_lead_message(request: &ContactRequest) -> String {
    [
        format!("שלום, אני {}", request.name),
        format!("טלפון: {}", request.phone),
        format!("אימייל: {}", request.email),
        format!("סוג הפרויקט: {}", request.get(ContactField::ProjectType)),
        format!("מיקום: {}", request.location),
        format!("פרטים נוספים: {}", request.message),
    ]
    .join("\n")
}

pub fn messaging_url(config: &SiteConfig, text: Option<&str>) -> String {
    let base = format!(
        "{}/{}",
        config.messaging_base_url.trim_end_matches('/'),
        config.messaging_recipient
    );
    match text {
        Some(text) => format!("{}?text={}", base, encode_uri_component(text)),
        None => base,
    }
}

pub fn telephone_url(config: &SiteConfig) -> String {
    format!("tel:{}", config.phone_number)
}

pub fn mail_url(config: &SiteConfig) -> String {
    format!("mailto:{}", config.email)
}
