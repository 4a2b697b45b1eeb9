mod metadata;

pub use metadata::LEVEL;
