use crate::content::ShowcaseItem;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowcaseStyle {
    /// Image above a caption block.
    #[default]
    Card,
    /// Caption laid over the image.
    Overlay,
}

#[component]
pub fn ShowcaseSection(
    #[prop(into)] title: String,
    items: &'static [ShowcaseItem],
    #[prop(optional)] style: ShowcaseStyle,
    #[prop(optional, into)] lead_in: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let grid_class = match style {
        ShowcaseStyle::Card => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8",
        ShowcaseStyle::Overlay => "grid grid-cols-1 lg:grid-cols-2 gap-8",
    };

    view! {
        <section class=format!("py-24 px-4 {}", class) aria-label=title.clone()>
            <div class="max-w-7xl mx-auto">
                {lead_in.map(|text| view! { <p class="text-2xl text-center text-gray-600 mb-16">{text}</p> })}
                <h2 class="text-4xl md:text-5xl font-bold text-gray-800 mb-16 text-center">{title}</h2>
                <div class=grid_class>
                    {items
                        .iter()
                        .map(|item| match style {
                            ShowcaseStyle::Card => view! { <ShowcaseCard item={*item} /> }.into_view(),
                            ShowcaseStyle::Overlay => view! { <ShowcaseOverlay item={*item} /> }.into_view(),
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ShowcaseCard(item: ShowcaseItem) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl overflow-hidden shadow-xl hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 h-full">
            <div class="h-80 overflow-hidden">
                <img
                    src=item.image
                    alt=item.name
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                />
            </div>
            <div class="p-8">
                <h3 class="text-2xl font-semibold mb-4">{item.name}</h3>
                <p class="text-gray-600 leading-relaxed">{item.description}</p>
            </div>
        </div>
    }
}

#[component]
fn ShowcaseOverlay(item: ShowcaseItem) -> impl IntoView {
    view! {
        <div class="group relative h-[550px] rounded-2xl overflow-hidden shadow-xl hover:shadow-2xl transition-all duration-300">
            <img
                src=item.image
                alt=item.name
                class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/40 to-transparent flex items-end">
                <div class="p-8 text-white transform translate-y-4 group-hover:translate-y-0 transition-transform duration-500">
                    <h3 class="text-3xl font-bold mb-4">{item.name}</h3>
                    <p class="text-lg opacity-90 leading-relaxed">{item.description}</p>
                </div>
            </div>
        </div>
    }
}
