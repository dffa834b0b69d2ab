use super::helpers::{provide_recorders, RecordingOpener, RecordingPresentation};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` with recording collaborators in context and hands the
/// recorders back for inspection.
pub fn render_with_recorders<F, N>(view: F) -> (String, RecordingPresentation, RecordingOpener)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let (html, (presentation, opener)) = with_runtime(|| {
        let recorders = provide_recorders();
        (view().into_view().render_to_string().to_string(), recorders)
    });
    (html, presentation, opener)
}
