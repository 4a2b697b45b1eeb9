pub mod dropdown;
pub mod metadata;
pub mod multipart;
pub mod pagination;
