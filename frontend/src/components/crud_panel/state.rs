use common::panel::{Entity, PanelState};

pub struct CrudPanel<E: Entity> {
    pub state: PanelState<E>,

    /// Guard for the first-render load.
    pub loaded: bool,
}

impl<E: Entity> CrudPanel<E> {
    pub fn new() -> Self {
        Self {
            state: PanelState::new(),
            loaded: false,
        }
    }
}
