use leptos::*;
use leptos_meta::*;
use std::rc::Rc;

use crate::{
    config,
    handoff::{BrowserLinkOpener, LinkOpener},
    pages::LandingPage,
    presentation::{DocumentRoot, PresentationSink},
};

pub const PAGE_LANG: &str = "he";
pub const PAGE_DIR: &str = "rtl";

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_app() {
    log::warn!("mount_app only mounts inside a browser");
}

pub fn app_root() -> impl IntoView {
    let site = config::current();
    provide_meta_context();
    provide_context(site.clone());
    provide_context::<Rc<dyn PresentationSink>>(Rc::new(DocumentRoot));
    provide_context::<Rc<dyn LinkOpener>>(Rc::new(BrowserLinkOpener));

    let title = format!("{} - תכנון וביצוע גינות", site.business_name);
    view! {
        <Html lang=PAGE_LANG dir=PAGE_DIR />
        <Title text=title />
        <Meta name="description" content="תכנון, ביצוע ותחזוקת גינות, מערכות השקיה, אדניות ברזל וקירות ירוקים" />
        <LandingPage />
    }
}
