pub mod config;
pub mod events;
pub mod macros;
pub mod report;
pub mod source;
pub mod sys;

#[cfg(feature = "gtk")]
pub mod gui;
