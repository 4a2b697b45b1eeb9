pub mod admin;
pub mod inquiries;
pub mod school_owner;
