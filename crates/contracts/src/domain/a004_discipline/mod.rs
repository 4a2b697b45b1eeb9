mod metadata;

pub use metadata::DISCIPLINE;
