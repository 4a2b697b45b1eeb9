mod metadata;

pub use metadata::SCHOOL_TYPE;
