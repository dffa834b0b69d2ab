use crate::content::CUSTOMER_LOGOS;
use leptos::*;

#[component]
pub fn CustomersSection() -> impl IntoView {
    view! {
        <section class="py-16 px-4 bg-white" aria-label="לקוחות">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl font-bold text-gray-800 mb-12 text-center">"הלקוחות שלנו"</h2>
                <div
                    class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-8 items-center justify-items-center"
                    role="list"
                >
                    {CUSTOMER_LOGOS
                        .iter()
                        .map(|logo| {
                            view! {
                                <div
                                    class="w-40 h-40 bg-white rounded-lg flex items-center justify-center p-4 hover:shadow-lg transition-shadow duration-300"
                                    role="listitem"
                                >
                                    <img src=logo.image alt=logo.name class="w-full h-full object-contain" />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
