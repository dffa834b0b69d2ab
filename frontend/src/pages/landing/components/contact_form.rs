use crate::components::common::Button;
use crate::components::icons::WhatsAppIcon;
use crate::state::lead::{ContactField, ContactRequest, ProjectType};
use leptos::*;

const CONTROL_CLASS: &str = "w-full px-6 py-4 border border-gray-200 rounded-xl focus:ring-2 focus:ring-emerald-500 focus:border-transparent transition-all duration-300 text-gray-900 bg-white";
const LABEL_CLASS: &str = "block text-gray-700 font-medium mb-3 text-lg";

pub fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "שם מלא",
        ContactField::Phone => "טלפון",
        ContactField::Email => "אימייל",
        ContactField::ProjectType => "סוג הפרויקט",
        ContactField::Location => "מיקום הפרויקט",
        ContactField::Message => "פרטים נוספים",
    }
}

fn aria_required(field: ContactField) -> Option<&'static str> {
    field.is_required().then_some("true")
}

/// Lead form. Field edits and submission are reported to the owner; the
/// browser's required-field validation runs before `on_submit` fires.
#[component]
pub fn ContactForm(
    #[prop(into)] request: Signal<ContactRequest>,
    on_field: Callback<(ContactField, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let value_of = move |field: ContactField| move || request.with(|r| r.get(field).to_string());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="space-y-8" aria-label="טופס יצירת קשר" on:submit=handle_submit>
            <TextField field=ContactField::Name input_type="text" request=request on_field=on_field />
            <TextField field=ContactField::Phone input_type="tel" request=request on_field=on_field />
            <TextField field=ContactField::Email input_type="email" request=request on_field=on_field />
            <div>
                <label for=ContactField::ProjectType.name() class=LABEL_CLASS>
                    {field_label(ContactField::ProjectType)}
                </label>
                <select
                    id=ContactField::ProjectType.name()
                    name=ContactField::ProjectType.name()
                    class=CONTROL_CLASS
                    required=true
                    aria-required=aria_required(ContactField::ProjectType)
                    prop:value=value_of(ContactField::ProjectType)
                    on:change=move |ev| on_field.call((ContactField::ProjectType, event_target_value(&ev)))
                >
                    <option value="">"בחר סוג פרויקט"</option>
                    {ProjectType::ALL
                        .iter()
                        .map(|project| view! { <option value=project.value()>{project.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <TextField
                field=ContactField::Location
                input_type="text"
                placeholder="עיר / שכונה"
                request=request
                on_field=on_field
            />
            <div>
                <label for=ContactField::Message.name() class=LABEL_CLASS>
                    {field_label(ContactField::Message)}
                </label>
                <textarea
                    id=ContactField::Message.name()
                    name=ContactField::Message.name()
                    rows="4"
                    class=CONTROL_CLASS
                    placeholder="ספר/י לנו קצת על הפרויקט..."
                    prop:value=value_of(ContactField::Message)
                    on:input=move |ev| on_field.call((ContactField::Message, event_target_value(&ev)))
                ></textarea>
            </div>
            <div class="flex justify-center">
                <Button class="px-8 py-4 rounded-xl text-lg" attr:type="submit" attr:aria-label="שלח פנייה">
                    <WhatsAppIcon class="w-6 h-6" />
                    "שלח פנייה בוואטסאפ"
                </Button>
            </div>
        </form>
    }
}

#[component]
fn TextField(
    field: ContactField,
    input_type: &'static str,
    request: Signal<ContactRequest>,
    on_field: Callback<(ContactField, String)>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.name() class=LABEL_CLASS>{field_label(field)}</label>
            <input
                type=input_type
                id=field.name()
                name=field.name()
                class=CONTROL_CLASS
                placeholder=placeholder
                required=field.is_required()
                aria-required=aria_required(field)
                prop:value=move || request.with(|r| r.get(field).to_string())
                on:input=move |ev| on_field.call((field, event_target_value(&ev)))
            />
        </div>
    }
}
