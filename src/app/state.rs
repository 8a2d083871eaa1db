//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod search;
mod view;

pub use app_state::{AppState, SessionState};
pub use interaction::{
    AddSpotDraft, ContextMenuState, DestinationDraft, EditSpotDraft, IconChoice, InteractionMode,
    MAX_ICON_NUMBER,
};
pub use search::{InFlightSearch, SearchState};
pub use view::{SpotPopup, ViewState};
