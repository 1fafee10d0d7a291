pub mod controls;
pub mod pose;
mod settings;

pub use settings::GLOBAL_CONFIG;
