use crate::error::SiteError;
use serde::Deserialize;
use std::sync::OnceLock;

const OVERRIDE_GLOBAL: &str = "__PRIMOGAN_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub business_name: String,
    pub brand_mark: String,
    pub messaging_base_url: String,
    pub messaging_recipient: String,
    pub phone_number: String,
    pub phone_display: String,
    pub email: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "Primo Gan".into(),
            brand_mark: "PRIMO-GAN".into(),
            messaging_base_url: "https://wa.me".into(),
            messaging_recipient: "972542001104".into(),
            phone_number: "+972542001104".into(),
            phone_display: "054-200-1104".into(),
            email: "primo.gan.ltd@gmail.com".into(),
            log_level: "info".into(),
        }
    }
}

/// Runtime overrides, e.g. `window.__PRIMOGAN_CONFIG = { phone_display: "..." }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigOverrides {
    pub business_name: Option<String>,
    pub brand_mark: Option<String>,
    pub messaging_base_url: Option<String>,
    pub messaging_recipient: Option<String>,
    pub phone_number: Option<String>,
    pub phone_display: Option<String>,
    pub email: Option<String>,
    pub log_level: Option<String>,
}

impl SiteConfig {
    pub fn with_overrides(mut self, overrides: SiteConfigOverrides) -> Self {
        fn merge(slot: &mut String, value: Option<String>) {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
        merge(&mut self.business_name, overrides.business_name);
        merge(&mut self.brand_mark, overrides.brand_mark);
        merge(&mut self.messaging_base_url, overrides.messaging_base_url);
        merge(&mut self.messaging_recipient, overrides.messaging_recipient);
        merge(&mut self.phone_number, overrides.phone_number);
        merge(&mut self.phone_display, overrides.phone_display);
        merge(&mut self.email, overrides.email);
        merge(&mut self.log_level, overrides.log_level);
        self
    }

    pub fn from_override_json(json: &str) -> Result<Self, SiteError> {
        let overrides: SiteConfigOverrides = serde_json::from_str(json)?;
        Ok(Self::default().with_overrides(overrides))
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

fn read_override_global() -> Result<Option<String>, SiteError> {
    let window = crate::utils::dom::window()?;
    let any = js_sys::Reflect::get(&window, &OVERRIDE_GLOBAL.into())
        .map_err(|_| SiteError::dom("failed to read config global"))?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    if let Some(raw) = any.as_string() {
        return Ok(Some(raw));
    }
    let json = js_sys::JSON::stringify(&any)
        .map_err(|_| SiteError::dom("config global is not serializable"))?;
    Ok(json.as_string())
}

fn resolve() -> SiteConfig {
    match read_override_global() {
        Ok(Some(json)) => SiteConfig::from_override_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring {}: {}", OVERRIDE_GLOBAL, err);
            SiteConfig::default()
        }),
        Ok(None) | Err(SiteError::NoWindow) => SiteConfig::default(),
        Err(err) => {
            log::warn!("ignoring {}: {}", OVERRIDE_GLOBAL, err);
            SiteConfig::default()
        }
    }
}

pub fn current() -> SiteConfig {
    SITE_CONFIG.get_or_init(resolve).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let cfg = SiteConfig::from_override_json(r#"{"phone_display":"03-555-0000"}"#).unwrap();
        assert_eq!(cfg.phone_display, "03-555-0000");
        assert_eq!(cfg.messaging_recipient, "972542001104");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let cfg = SiteConfig::from_override_json(r#"{"email":"  "}"#).unwrap();
        assert_eq!(cfg.email, "primo.gan.ltd@gmail.com");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = SiteConfig::from_override_json(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(cfg, SiteConfig::default());
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        let err = SiteConfig::from_override_json("not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let mut cfg = SiteConfig::default();
        cfg.log_level = "debug".into();
        assert_eq!(cfg.log_level(), log::Level::Debug);
        cfg.log_level = "chatty".into();
        assert_eq!(cfg.log_level(), log::Level::Info);
    }

    #[test]
    fn current_uses_defaults_without_a_browser() {
        assert_eq!(current(), SiteConfig::default());
    }
}
