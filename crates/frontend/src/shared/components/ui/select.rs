use leptos::prelude::*;

/// Select component with a leading prompt option.
///
/// Selection is positional: `on_change` receives the index into `options`,
/// or `None` when the prompt is chosen. Option values may repeat.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Text of the empty first option
    #[prop(into)]
    prompt: Signal<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Index of the selected option
    #[prop(into)]
    selected: Signal<Option<usize>>,
    /// Disabled state
    #[prop(into)]
    disabled: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<Option<usize>>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let indexed_options = move || {
        options
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<(usize, (String, String))>>()
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        let index = event_target::<web_sys::HtmlSelectElement>(&ev).selected_index();
                        handler.run(option_position(index));
                    }
                }
            >
                <option value="" prop:selected=move || selected.get().is_none()>
                    {move || prompt.get()}
                </option>
                <For
                    each=indexed_options
                    key=|(index, (val, label))| (*index, val.clone(), label.clone())
                    children=move |(index, (val, label))| {
                        let is_selected = move || selected.get() == Some(index);
                        view! {
                            <option value=val prop:selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Maps `HtmlSelectElement::selected_index` to a position in `options`.
///
/// Index 0 is the prompt, -1 means nothing is selected.
pub fn option_position(selected_index: i32) -> Option<usize> {
    usize::try_from(selected_index.saturating_sub(1)).ok()
}
