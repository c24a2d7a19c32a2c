pub mod domain;
pub mod error;
pub mod landing;
pub mod protocol;
