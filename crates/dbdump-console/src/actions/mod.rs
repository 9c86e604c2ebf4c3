//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `Global`: application-wide actions (quit, refresh, navigation)
//! - `Config`: configuration collection actions (fetch, save, delete, select)
//! - `Operation`: operation log actions (fetch, trigger dump/restore)
//! - `Form`: config form editing actions
//!
//! Request/success/failure triples follow one pattern throughout: the
//! request action passes through to the reducer (so it can set loading
//! state), the backend middleware performs the HTTP call, and the
//! success/failure action is dispatched once the call resolves.

pub mod config;
pub mod form;
pub mod global;
pub mod operation;

pub use config::ConfigAction;
pub use form::FormAction;
pub use global::GlobalAction;
pub use operation::OperationAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Configuration collection actions
    Config(ConfigAction),
    /// Operation log actions
    Operation(OperationAction),
    /// Config form actions
    Form(FormAction),
}
