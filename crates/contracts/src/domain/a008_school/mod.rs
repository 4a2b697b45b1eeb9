mod metadata;

pub use metadata::{OWN_PROFILE, SCHOOL};
