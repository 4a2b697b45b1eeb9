mod metadata;

pub use metadata::EVENT;
