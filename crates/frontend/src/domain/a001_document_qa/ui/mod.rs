//! Document QA UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (multipart upload + JSON ask)
//! - view_model.rs: DocumentQaVm with RwSignals
//! - controller.rs: selection validation and the two async actions
//! - view.rs: Main component DocumentQaPage

mod controller;
mod model;
mod view;
mod view_model;

pub use view::DocumentQaPage;
pub use view_model::DocumentQaVm;
