use crate::components::common::Button;
use crate::components::icons::{Icon, IconKind, WhatsAppIcon};
use crate::device::DeviceKind;
use leptos::*;

pub fn contact_aria_label(kind: DeviceKind) -> &'static str {
    match kind {
        DeviceKind::Mobile => "צור קשר בוואטסאפ",
        DeviceKind::Desktop => "צור קשר בטלפון",
    }
}

/// Opens the messaging app on mobile and the dialer elsewhere. `labelled`
/// swaps the phone number for a call-to-action text on mobile.
#[component]
pub fn DirectContactButton(
    device: Signal<DeviceKind>,
    #[prop(into)] phone_display: String,
    on_contact: Callback<()>,
    #[prop(optional)] labelled: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let phone_display = store_value(phone_display);
    let content = move || match device.get() {
        DeviceKind::Mobile if labelled => view! {
            <WhatsAppIcon class="w-6 h-6" />
            {contact_aria_label(DeviceKind::Mobile)}
        }
        .into_view(),
        DeviceKind::Mobile => view! {
            {phone_display.get_value()}
            <WhatsAppIcon class="w-7 h-7" />
        }
        .into_view(),
        DeviceKind::Desktop => view! {
            <Icon kind=IconKind::Phone class="h-6 w-6" />
            {phone_display.get_value()}
        }
        .into_view(),
    };

    view! {
        <Button
            class=format!("px-8 py-4 text-lg font-medium tracking-wide {}", class)
            on_click=Callback::new(move |_| on_contact.call(()))
            attr:type="button"
            attr:aria-label=move || contact_aria_label(device.get())
        >
            {content}
        </Button>
    }
}

#[component]
pub fn MailLink(#[prop(into)] email: String, #[prop(into)] href: String) -> impl IntoView {
    view! {
        <a
            href=href
            class="flex items-center gap-3 text-gray-600 hover:text-emerald-600 transition-colors duration-300"
            aria-label="שלח אימייל"
        >
            <Icon kind=IconKind::Mail class="h-6 w-6" />
            <span class="text-lg">{email}</span>
        </a>
    }
}
