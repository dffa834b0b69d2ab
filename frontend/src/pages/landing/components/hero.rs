use super::contact_links::DirectContactButton;
use crate::device::DeviceKind;
use leptos::*;

#[component]
pub fn HeroSection(
    #[prop(into)] brand_mark: String,
    #[prop(into)] phone_display: String,
    device: Signal<DeviceKind>,
    on_contact: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="relative h-screen" aria-label="ראשי">
            <div class="absolute inset-0">
                <img
                    src="/images/hero-garden.jpg"
                    alt="נוף גינה יפה"
                    class="w-full h-full object-cover"
                    role="presentation"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-gray-900/80 to-gray-900/40" aria-hidden="true"></div>
            </div>
            <div class="relative w-full h-full flex flex-col justify-between">
                <div class="w-full px-4 pt-32 flex justify-end">
                    <div class="text-white mr-[25%]">
                        <h1 class="text-7xl md:text-9xl font-normal mb-6 leading-tight">
                            <span class="english-brand text-slate-50 inline-block drop-shadow-md" aria-label={brand_mark.clone()}>
                                {brand_mark.clone()}
                            </span>
                        </h1>
                    </div>
                </div>
                <div class="w-full px-12 pb-12">
                    <DirectContactButton device=device phone_display=phone_display on_contact=on_contact />
                </div>
            </div>
        </section>
    }
}
