use super::*;

#[component]
/// Anchored overlay surface that stays mounted while closed.
///
/// Children keep their state across open/close cycles; only visibility toggles. Escape inside the
/// surface requests dismissal through `on_dismiss`.
pub fn Popover(
    #[prop(into)] open: Signal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-popover", layout_class)
            id=id
            role="dialog"
            aria-modal="false"
            aria-label=move || aria_label.get()
            hidden=move || !open.get()
            data-ui-primitive="true"
            data-ui-kind="popover"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(());
                    }
                }
            }
        >
            {children()}
        </div>
    }
}
