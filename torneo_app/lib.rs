pub mod config;
pub mod forms;
pub mod navigation;
pub mod service;
pub mod test_utils;
pub mod update_component;

pub use update_component::{
    NoopSaveErrorHandler, SaveErrorHandler, SaveOutcome, UpdateComponent,
};
