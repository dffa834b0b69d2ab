use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::handoff::{compose_lead_message, messaging_url, LinkOpener, LinkTarget, OutboundLink};
use leptos::*;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Garden,
    Maintenance,
    Irrigation,
    Planter,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Garden,
        ProjectType::Maintenance,
        ProjectType::Irrigation,
        ProjectType::Planter,
        ProjectType::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::Garden => "garden",
            ProjectType::Maintenance => "maintenance",
            ProjectType::Irrigation => "irrigation",
            ProjectType::Planter => "planter",
            ProjectType::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|project| project.value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Garden => "תכנון וביצוע גינה",
            ProjectType::Maintenance => "תחזוקת גינה",
            ProjectType::Irrigation => "מערכת השקיה",
            ProjectType::Planter => "אדנית ברזל",
            ProjectType::Other => "אחר",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    ProjectType,
    Location,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::ProjectType,
        ContactField::Location,
        ContactField::Message,
    ];

    /// Form control name, also used as the element id.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::ProjectType => "projectType",
            ContactField::Location => "location",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Message)
    }
}

impl FromStr for ContactField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| SiteError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub project_type: Option<ProjectType>,
    pub location: String,
}

impl ContactRequest {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::ProjectType => self.project_type.map_or("", |project| project.value()),
            ContactField::Location => &self.location,
            ContactField::Message => &self.message,
        }
    }

    /// Project type accepts only the listed option values; anything else
    /// clears it.
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::ProjectType => {
                self.project_type = ProjectType::from_value(&value);
                if self.project_type.is_none() && !value.is_empty() {
                    log::debug!("ignoring unknown project type `{}`", value);
                }
                return;
            }
            ContactField::Location => &mut self.location,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactRequest::default()
    }
}

/// The single in-progress contact request for the page session.
#[derive(Clone)]
pub struct LeadStore {
    request: RwSignal<ContactRequest>,
    config: SiteConfig,
    opener: Rc<dyn LinkOpener>,
}

impl LeadStore {
    pub fn new(config: SiteConfig, opener: Rc<dyn LinkOpener>) -> Self {
        Self {
            request: create_rw_signal(ContactRequest::default()),
            config,
            opener,
        }
    }

    pub fn request(&self) -> Signal<ContactRequest> {
        self.request.into()
    }

    pub fn update_field(&self, field: ContactField, value: String) {
        self.request.update(|request| request.set(field, value));
    }

    /// Hands the request off to the messaging service and clears it. Exactly
    /// one link is opened per call; the request is cleared either way.
    pub fn submit(&self) -> OutboundLink {
        let request = self.request.get_untracked();
        let missing = request.missing_required();
        if !missing.is_empty() {
            log::warn!("submitting lead with empty required fields: {:?}", missing);
        }

        let text = compose_lead_message(&request);
        let link = OutboundLink::new(
            messaging_url(&self.config, Some(&text)),
            LinkTarget::NewContext,
        );
        log::info!(
            "handing lead off to messaging (project type: {:?})",
            request.project_type
        );
        self.opener.open(&link);
        self.request.set(ContactRequest::default());
        link
    }
}
