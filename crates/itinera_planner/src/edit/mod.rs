mod command;
mod day_reference;
mod engine;

pub use command::{Attribute, EditCommand, Fame};
pub use day_reference::parse_day_reference;
pub use engine::EditEngine;
