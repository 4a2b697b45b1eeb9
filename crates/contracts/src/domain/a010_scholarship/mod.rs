mod metadata;

pub use metadata::SCHOLARSHIP;
