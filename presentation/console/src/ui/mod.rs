pub mod command;
pub mod notifier;
pub mod render;
pub mod validation;
