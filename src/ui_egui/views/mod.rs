pub mod event_card;
pub(crate) mod palette;
pub mod time_grid;
