mod metadata;

pub use metadata::INQUIRY;
