//! Generic admin pages, instantiated per entity from its descriptor

pub mod model;
pub mod ui;
