mod metadata;

pub use metadata::ADVERTISEMENT;
