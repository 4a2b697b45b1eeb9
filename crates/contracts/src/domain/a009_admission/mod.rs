mod metadata;

pub use metadata::ADMISSION;
