use super::components::{
    contact_form::ContactForm,
    contact_links::{DirectContactButton, MailLink},
    customers::CustomersSection,
    hero::HeroSection,
    services::ServicesSection,
    showcase::{ShowcaseSection, ShowcaseStyle},
};
use super::view_model::use_landing_view_model;
use crate::components::accessibility_toolbar::AccessibilityToolbar;
use crate::content::{PLANTERS, VERTICAL_GARDENS};
use crate::presentation::root_class_names;
use crate::state::lead::ContactField;
use crate::state::preferences::PreferenceIntent;
use leptos::*;

#[component]
pub fn LandingPanel() -> impl IntoView {
    let vm = use_landing_view_model();
    let preferences = vm.preferences.state();

    let on_intent = {
        let store = vm.preferences.clone();
        Callback::new(move |intent: PreferenceIntent| store.dispatch(intent))
    };
    let on_field = {
        let lead = vm.lead.clone();
        Callback::new(move |(field, value): (ContactField, String)| lead.update_field(field, value))
    };
    let on_submit = {
        let lead = vm.lead.clone();
        Callback::new(move |_: ()| {
            lead.submit();
        })
    };
    let on_direct_contact = {
        let vm = vm.clone();
        Callback::new(move |_: ()| vm.open_direct_contact())
    };

    let wrapper_class = move || {
        format!(
            "min-h-screen bg-gradient-to-b from-gray-50 to-white text-right {}",
            root_class_names(&preferences.get())
        )
    };

    view! {
        <div class=wrapper_class dir="rtl" role="main" aria-label="Primo Gan - תכנון וביצוע גינות">
            <AccessibilityToolbar state=preferences on_intent=on_intent />
            <HeroSection
                brand_mark={vm.config.brand_mark.clone()}
                phone_display={vm.config.phone_display.clone()}
                device={vm.device}
                on_contact=on_direct_contact
            />
            <ServicesSection />
            <ShowcaseSection
                title="אדניות ברזל"
                lead_in="בנוסף אנחנו מתמחים גם ב..."
                items=PLANTERS
                class="bg-gradient-to-b from-gray-50 to-white"
            />
            <ShowcaseSection
                title="קירות ירוקים"
                items=VERTICAL_GARDENS
                style=ShowcaseStyle::Overlay
                class="bg-white"
            />
            <CustomersSection />
            <section class="py-24 px-4 bg-gradient-to-b from-gray-50 to-white" aria-label="צור קשר">
                <div class="max-w-3xl mx-auto bg-white rounded-2xl shadow-xl p-8 md:p-12">
                    <h2 class="text-4xl font-bold text-gray-800 mb-12 text-center">
                        "השאירו פרטים לשיחת ייעוץ והצעת מחיר"
                    </h2>
                    <ContactForm request={vm.lead.request()} on_field=on_field on_submit=on_submit />
                    <div class="mt-12 flex justify-center gap-6">
                        <DirectContactButton
                            device={vm.device}
                            phone_display={vm.config.phone_display.clone()}
                            on_contact=on_direct_contact
                            labelled=true
                        />
                        <MailLink email={vm.config.email.clone()} href={vm.mail_href()} />
                    </div>
                </div>
            </section>
        </div>
    }
}
