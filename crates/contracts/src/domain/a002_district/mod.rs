mod metadata;

pub use metadata::DISTRICT;
