//! Reducers
//!
//! Pure functions that produce new state from current state + action.
//! No side effects; effectful work lives in the middleware chain.

pub mod app_reducer;
pub mod config_reducer;
pub mod form_reducer;
pub mod operation_reducer;
