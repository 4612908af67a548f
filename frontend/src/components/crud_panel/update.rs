//! Message handling for [`CrudPanel`].
//!
//! Requests are spawned with `spawn_local`; their results come back as
//! `Loaded`, `Submitted` and `Deleted`. Write failures leave the panel state
//! untouched and are reported with one generic alert per action.

use common::api::ApiError;
use common::panel::{self, Action, Entity};
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CrudPanel;
use crate::platform::{alert, confirm};

pub fn update<E: Entity>(panel: &mut CrudPanel<E>, ctx: &Context<CrudPanel<E>>, msg: Msg<E>) -> bool {
    match msg {
        Msg::Reload => {
            reload(panel, ctx);
            true
        }
        Msg::Loaded(ticket, result) => panel.state.finish_load(ticket, result),
        Msg::ShowList => {
            panel.state.cancel();
            true
        }
        Msg::ShowCreate => {
            panel.state.start_create();
            true
        }
        Msg::Edit(id) => match panel.state.record(id).cloned() {
            Some(record) => {
                panel.state.start_edit(&record);
                true
            }
            None => false,
        },
        Msg::SetField(name, value) => {
            panel.state.set_field(name, value);
            true
        }
        Msg::Submit => {
            let write = panel.state.pending_write();
            let action = write.action();
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = panel::submit::<E, _>(&client, &write).await;
                link.send_message(Msg::<E>::Submitted(action, result));
            });
            false
        }
        Msg::Submitted(action, result) => {
            if !report::<E>(action, &result) {
                return false;
            }
            panel.state.complete_write();
            after_write(panel, ctx);
            true
        }
        Msg::Delete(id) => {
            if let Some(question) = Action::Delete.confirmation(E::NOUN) {
                if !confirm(&question) {
                    return false;
                }
            }
            let client = ctx.props().client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = panel::remove::<E, _>(&client, id).await;
                link.send_message(Msg::<E>::Deleted(result));
            });
            false
        }
        Msg::Deleted(result) => {
            let deleted = report::<E>(Action::Delete, &result);
            if deleted {
                after_write(panel, ctx);
            }
            deleted
        }
    }
}

/// Issues a load; only its response (or a later one) will be applied.
pub fn reload<E: Entity>(panel: &mut CrudPanel<E>, ctx: &Context<CrudPanel<E>>) {
    let ticket = panel.state.begin_load();
    let client = ctx.props().client.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = panel::load::<E, _>(&client).await;
        link.send_message(Msg::<E>::Loaded(ticket, result));
    });
}

fn after_write<E: Entity>(panel: &mut CrudPanel<E>, ctx: &Context<CrudPanel<E>>) {
    match &ctx.props().on_change {
        Some(on_change) => on_change.emit(()),
        None => reload(panel, ctx),
    }
}

/// Alerts the outcome of `action`. Returns whether it succeeded.
fn report<E: Entity>(action: Action, result: &Result<(), ApiError>) -> bool {
    match result {
        Ok(()) => {
            alert(&action.success(E::NOUN));
            true
        }
        Err(e) => {
            error!("{:?} {} failed: {}", action, E::NOUN, e);
            alert(&action.failure(E::NOUN));
            false
        }
    }
}
