mod metadata;

pub use metadata::COURSE;
