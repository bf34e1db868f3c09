// Utility module exports

pub mod geometry;
