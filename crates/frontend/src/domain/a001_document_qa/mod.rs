pub mod ui;

pub use ui::DocumentQaPage;
