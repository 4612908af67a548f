//! Form controls rendered from a [`Field`] schema.
//!
//! Every control reports `(field name, raw text)` through the same callback;
//! coercion to JSON happens later in `FormState::payload`.

use common::panel::{Field, FieldKind, FormState, Lookups};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub type FieldCallback = Callback<(&'static str, String)>;

/// Renders all `fields` bound to `form`.
pub fn field_list(fields: &'static [Field], form: &FormState, lookups: &Lookups, on_input: &FieldCallback) -> Html {
    html! {
        { for fields.iter().map(|field| field_input(field, form.get(field.name), lookups, on_input)) }
    }
}

pub fn field_input(field: &Field, value: &str, lookups: &Lookups, on_input: &FieldCallback) -> Html {
    let name = field.name;
    let control = match field.kind {
        FieldKind::Text => text_input("text", name, value, on_input),
        FieldKind::Integer => text_input("number", name, value, on_input),
        FieldKind::Date => text_input("date", name, value, on_input),
        FieldKind::Time => text_input("time", name, value, on_input),
        FieldKind::Choice(choices) => {
            let options = choices.iter().map(|c| (c.to_string(), c.to_string())).collect();
            select(name, value, options, false, on_input)
        }
        FieldKind::Reference(lookup) => {
            let options = lookups
                .options(lookup)
                .into_iter()
                .map(|(id, label)| (id.to_string(), label))
                .collect();
            select(name, value, options, true, on_input)
        }
    };

    html! {
        <label class="form-field">
            <span class="form-label">{ field.label }</span>
            { control }
        </label>
    }
}

fn text_input(kind: &'static str, name: &'static str, value: &str, on_input: &FieldCallback) -> Html {
    let oninput = on_input.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (name, input.value())
    });

    html! {
        <input type={kind} {name} value={value.to_string()} {oninput} />
    }
}

/// `<select>` over `(value, label)` pairs. Reference selects start with an
/// empty choice so that nothing is picked implicitly.
fn select(
    name: &'static str,
    value: &str,
    options: Vec<(String, String)>,
    with_placeholder: bool,
    on_input: &FieldCallback,
) -> Html {
    let onchange = on_input.reform(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        (name, select.value())
    });

    html! {
        <select {name} {onchange}>
            if with_placeholder {
                <option value="" selected={value.is_empty()}>{"Select..."}</option>
            }
            { for options.into_iter().map(|(option, label)| {
                let selected = option == value;
                html! { <option value={option} {selected}>{ label }</option> }
            }) }
        </select>
    }
}
