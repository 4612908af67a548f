use common::panel::{Entity, Mode};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CrudPanel;
use crate::components::form_fields::field_list;

pub fn view<E: Entity>(panel: &CrudPanel<E>, ctx: &Context<CrudPanel<E>>) -> Html {
    let link = ctx.link();
    let title = ctx.props().title.clone();

    if panel.state.loading {
        return html! {
            <section class="panel">
                <h2>{ title }</h2>
                <div class="loading">{"Loading..."}</div>
            </section>
        };
    }

    html! {
        <section class="panel">
            <div class="panel-header">
                <h2>{ title }</h2>
                <button onclick={link.callback(|_| Msg::<E>::Reload)}>{"Refresh"}</button>
                if panel.state.mode == Mode::Listing {
                    <button class="btn-primary" onclick={link.callback(|_| Msg::<E>::ShowCreate)}>
                        { format!("New {}", E::NOUN) }
                    </button>
                }
            </div>
            { build_form(panel, link) }
            { build_table(panel, link) }
        </section>
    }
}

fn build_form<E: Entity>(panel: &CrudPanel<E>, link: &Scope<CrudPanel<E>>) -> Html {
    let heading = match panel.state.mode {
        Mode::Listing => return Html::default(),
        Mode::Creating => format!("Add {}", E::NOUN),
        Mode::Editing { id } => format!("Edit {} #{}", E::NOUN, id),
    };

    let on_input = link.callback(|(name, value): (&'static str, String)| Msg::<E>::SetField(name, value));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::<E>::Submit
    });

    html! {
        <form class="panel-form" {onsubmit}>
            <h3>{ heading }</h3>
            { field_list(E::FIELDS, &panel.state.form, &panel.state.lookups, &on_input) }
            <div class="form-actions">
                <button type="submit" class="btn-primary">{"Save"}</button>
                <button type="button" onclick={link.callback(|_| Msg::<E>::ShowList)}>{"Cancel"}</button>
            </div>
        </form>
    }
}

fn build_table<E: Entity>(panel: &CrudPanel<E>, link: &Scope<CrudPanel<E>>) -> Html {
    if panel.state.records.is_empty() {
        return html! { <p class="empty">{ format!("No {} records.", E::NOUN) }</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    { for E::COLUMNS.iter().map(|c| html! { <th>{ *c }</th> }) }
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for panel.state.records.iter().map(|record| {
                    let id = record.id();
                    html! {
                        <tr key={id}>
                            { for record.cells(&panel.state.lookups).into_iter().map(|c| html! { <td>{ c }</td> }) }
                            <td class="row-actions">
                                <button onclick={link.callback(move |_| Msg::<E>::Edit(id))}>{"Edit"}</button>
                                <button class="btn-danger" onclick={link.callback(move |_| Msg::<E>::Delete(id))}>
                                    {"Delete"}
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
