mod metadata;

pub use metadata::INFORMATION;
