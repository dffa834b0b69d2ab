//! Browser accessors. Outside `wasm32` every accessor reports
//! [`SiteError::NoWindow`] so host builds never call into wasm-bindgen imports.

use crate::error::SiteError;
use web_sys::{HtmlElement, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, SiteError> {
    Err(SiteError::NoWindow)
}

pub fn document_root() -> Result<HtmlElement, SiteError> {
    use wasm_bindgen::JsCast;

    window()?
        .document()
        .ok_or(SiteError::NoDocument)?
        .document_element()
        .ok_or(SiteError::NoDocument)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::dom("document root is not an HTML element"))
}

pub fn user_agent() -> Result<String, SiteError> {
    window()?
        .navigator()
        .user_agent()
        .map_err(|_| SiteError::dom("navigator.userAgent is unavailable"))
}
