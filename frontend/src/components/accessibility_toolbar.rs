use crate::components::icons::{Icon, IconKind};
use crate::state::preferences::{PreferenceIntent, PreferenceState};
use leptos::*;

const TOOL_BUTTON_CLASS: &str = "p-2 hover:bg-gray-100 rounded-md transition-colors";

/// Floating reading-comfort controls. Renders the given state and reports
/// intents; it keeps no state of its own.
#[component]
pub fn AccessibilityToolbar(
    #[prop(into)] state: Signal<PreferenceState>,
    on_intent: Callback<PreferenceIntent>,
) -> impl IntoView {
    let is_open = move || state.with(|s| s.toolbar_open);
    let high_contrast = move || state.with(|s| s.high_contrast);
    let dark_theme = move || state.with(|s| s.dark_theme);

    view! {
        <div class="fixed bottom-4 right-4 z-50">
            <button
                type="button"
                class="bg-emerald-600 text-white p-3 rounded-full shadow-lg hover:bg-emerald-700 transition-colors"
                aria-label="פתח כלי נגישות"
                aria-expanded=move || is_open().to_string()
                aria-controls="accessibility-panel"
                on:click=move |_| on_intent.call(PreferenceIntent::ToggleToolbar)
            >
                <Icon kind=IconKind::Accessibility class="w-6 h-6" />
            </button>
            <Show when=is_open>
                <div
                    id="accessibility-panel"
                    class="absolute bottom-0 right-12 mb-2 bg-white rounded-lg shadow-lg p-2 border border-gray-200"
                >
                    <div class="flex flex-col gap-2">
                        <button
                            type="button"
                            class=TOOL_BUTTON_CLASS
                            aria-label="הגדל גודל טקסט"
                            on:click=move |_| on_intent.call(PreferenceIntent::IncreaseTextScale)
                        >
                            <Icon kind=IconKind::ZoomIn class="w-5 h-5" />
                        </button>
                        <button
                            type="button"
                            class=TOOL_BUTTON_CLASS
                            aria-label="הקטן גודל טקסט"
                            on:click=move |_| on_intent.call(PreferenceIntent::DecreaseTextScale)
                        >
                            <Icon kind=IconKind::ZoomOut class="w-5 h-5" />
                        </button>
                        <button
                            type="button"
                            class=TOOL_BUTTON_CLASS
                            class:bg-gray-100=high_contrast
                            aria-label="החלף ניגודיות"
                            aria-pressed=move || high_contrast().to_string()
                            on:click=move |_| on_intent.call(PreferenceIntent::ToggleContrast)
                        >
                            <Icon kind=IconKind::Contrast class="w-5 h-5" />
                        </button>
                        <button
                            type="button"
                            class=TOOL_BUTTON_CLASS
                            class:bg-gray-100=dark_theme
                            aria-label="החלף ערכת נושא"
                            aria-pressed=move || dark_theme().to_string()
                            on:click=move |_| on_intent.call(PreferenceIntent::ToggleTheme)
                        >
                            {move || {
                                let kind = if dark_theme() { IconKind::Sun } else { IconKind::Moon };
                                view! { <Icon kind=kind class="w-5 h-5" /> }
                            }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
