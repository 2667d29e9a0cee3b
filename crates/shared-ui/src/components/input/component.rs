use dioxus::prelude::*;

/// Labelled single-line input.
///
/// `min`/`max` apply to numeric and date inputs and are skipped when empty.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] min: String,
    #[props(default)] max: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let min = (!min.is_empty()).then_some(min);
    let max = (!max.is_empty()).then_some(max);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-field",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                min: min,
                max: max,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
