mod metadata;

pub use metadata::UNIVERSITY;
