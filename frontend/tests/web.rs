#![cfg(target_arch = "wasm32")]

use leptos::*;
use primogan_frontend::components::accessibility_toolbar::AccessibilityToolbar;
use primogan_frontend::device::{use_device_kind, watch_resize, DeviceKind};
use primogan_frontend::presentation::{DocumentRoot, PresentationSink, DARK_CLASS, HIGH_CONTRAST_CLASS};
use primogan_frontend::state::preferences::{
    PreferenceChange, PreferenceIntent, PreferenceState, TextScale,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> web_sys::HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into().ok())
        .expect("document root")
}

#[wasm_bindgen_test]
fn theme_and_contrast_toggle_root_classes() {
    let sink = DocumentRoot;
    sink.apply(PreferenceChange::DarkTheme(true));
    sink.apply(PreferenceChange::HighContrast(true));
    assert!(root().class_list().contains(DARK_CLASS));
    assert!(root().class_list().contains(HIGH_CONTRAST_CLASS));

    sink.apply(PreferenceChange::DarkTheme(false));
    sink.apply(PreferenceChange::HighContrast(false));
    assert!(!root().class_list().contains(DARK_CLASS));
    assert!(!root().class_list().contains(HIGH_CONTRAST_CLASS));
}

#[wasm_bindgen_test]
fn text_scale_sets_root_font_size() {
    DocumentRoot.apply(PreferenceChange::TextScale(TextScale::from_tenths(12)));
    let size = root().style().get_property_value("font-size").unwrap();
    assert_eq!(size, "1.2rem");
}

#[wasm_bindgen_test]
fn user_agent_is_readable() {
    assert!(primogan_frontend::utils::dom::user_agent().is_ok());
}

fn mount_container() -> web_sys::HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let container: web_sys::HtmlElement = document
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("html element");
    document
        .body()
        .expect("body")
        .append_child(&container)
        .expect("append container");
    container
}

fn click(container: &web_sys::HtmlElement, label: &str) {
    let button: web_sys::HtmlElement = container
        .query_selector(&format!("button[aria-label=\"{}\"]", label))
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no button labelled {}", label))
        .dyn_into()
        .expect("html element");
    button.click();
}

fn dispatch_resize() {
    let event = web_sys::Event::new("resize").expect("resize event");
    web_sys::window()
        .expect("window")
        .dispatch_event(&event)
        .expect("dispatch resize");
}

#[wasm_bindgen_test]
fn toolbar_buttons_emit_their_intents() {
    let container = mount_container();
    let recorded = Rc::new(RefCell::new(Vec::<PreferenceIntent>::new()));
    let sink = Rc::clone(&recorded);
    mount_to(container.clone(), move || {
        let state = create_rw_signal(PreferenceState {
            toolbar_open: true,
            ..PreferenceState::default()
        });
        let on_intent = Callback::new(move |intent: PreferenceIntent| sink.borrow_mut().push(intent));
        view! { <AccessibilityToolbar state=state on_intent=on_intent /> }
    });

    for label in [
        "הגדל גודל טקסט",
        "הקטן גודל טקסט",
        "החלף ניגודיות",
        "החלף ערכת נושא",
        "פתח כלי נגישות",
    ] {
        click(&container, label);
    }

    assert_eq!(
        *recorded.borrow(),
        vec![
            PreferenceIntent::IncreaseTextScale,
            PreferenceIntent::DecreaseTextScale,
            PreferenceIntent::ToggleContrast,
            PreferenceIntent::ToggleTheme,
            PreferenceIntent::ToggleToolbar,
        ]
    );
    container.remove();
}

#[wasm_bindgen_test]
fn resize_listener_is_removed_with_its_owner() {
    let resizes = Rc::new(Cell::new(0));
    let watch = as_child_of_current_owner({
        let resizes = Rc::clone(&resizes);
        move |()| {
            let resizes = Rc::clone(&resizes);
            watch_resize(move || resizes.set(resizes.get() + 1));
        }
    });
    let ((), disposer) = watch(());

    dispatch_resize();
    dispatch_resize();
    assert_eq!(resizes.get(), 2);

    drop(disposer);
    dispatch_resize();
    assert_eq!(resizes.get(), 2);
}

#[wasm_bindgen_test]
fn device_kind_follows_user_agent_across_resizes() {
    let agent = primogan_frontend::utils::dom::user_agent().expect("user agent");
    let expected = DeviceKind::from_user_agent(&agent);
    let track = as_child_of_current_owner(|()| use_device_kind());
    let (kind, disposer) = track(());

    assert_eq!(kind.get_untracked(), expected);
    dispatch_resize();
    assert_eq!(kind.get_untracked(), expected);
    drop(disposer);
}
