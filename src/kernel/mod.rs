//! Headless editing core (state/action/effect).

pub mod action;
pub mod coordinator;
pub mod dnd;
pub mod effect;
pub mod repository;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use coordinator::{EditingMode, EditingSelection};
pub use effect::Effect;
pub use repository::Repository;
pub use state::{
    AppState, ConfirmDialogState, ConfirmVariant, ConfirmationRequest, DialogInput,
    PendingAction, UiState,
};
pub use store::{DispatchResult, Store};
