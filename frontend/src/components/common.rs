use leptos::*;

const BRAND_CLASS: &str = "bg-gradient-to-r from-[#5F7161] to-[#6D8B74] hover:from-[#526153] hover:to-[#5c7461] text-white shadow-lg hover:shadow-xl transform hover:scale-105 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-emerald-600";

#[component]
pub fn Button(
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "inline-flex items-center justify-center gap-3 rounded-lg transition-all duration-300 {} {}",
                BRAND_CLASS,
                class
            )
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
            {..attributes}
        >
            {children()}
        </button>
    }
}
