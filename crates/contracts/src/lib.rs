//! Wire-level shapes shared by the admin UI: entity and field metadata,
//! validation rules, dropdown keys, paginated envelopes and the multipart
//! payload model.

pub mod domain;
pub mod shared;
