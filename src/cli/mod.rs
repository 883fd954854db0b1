pub mod commands;
pub mod ui;

pub use commands::{ConfigFormat, SummaryFormat};
pub use ui::Output;
