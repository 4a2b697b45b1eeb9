//! Inquiries and pre-registrations: the admin overview across schools and
//! the pieces the school owner inbox shares with it

pub mod filter;
pub mod model;
pub mod ui;
