use crate::components::icons::Icon;
use crate::content::SERVICES;
use leptos::*;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-white" aria-label="שירותים">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-4xl md:text-5xl font-bold text-gray-800 mb-8 text-center">"השירותים שלנו"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div
                                    class="bg-white p-8 rounded-2xl hover:shadow-2xl transition-all duration-300 transform hover:-translate-y-2 border border-gray-100"
                                    role="article"
                                >
                                    <Icon kind={service.icon.into()} class="h-16 w-16 text-emerald-600 mb-6 mx-auto" />
                                    <h3 class="text-2xl font-semibold mb-4 text-center">{service.title}</h3>
                                    <p class="text-gray-600 text-center leading-relaxed">{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
