use common::api::ApiError;
use common::panel::{Action, Entity, LoadTicket, PanelData};

pub enum Msg<E: Entity> {
    Reload,
    Loaded(LoadTicket, Result<PanelData<E>, ApiError>),
    ShowList,
    ShowCreate,
    Edit(i64),
    SetField(&'static str, String),
    Submit,
    Submitted(Action, Result<(), ApiError>),
    Delete(i64),
    Deleted(Result<(), ApiError>),
}
