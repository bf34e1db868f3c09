// Service module exports

pub mod selection;
pub mod settings;
pub mod time_format;
