mod metadata;

pub use metadata::FACILITY;
