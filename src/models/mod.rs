// Module exports for models

pub mod card;
pub mod schedule;
pub mod selection;
pub mod settings;
