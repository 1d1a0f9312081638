pub mod error;
pub mod helpers;
pub mod post_validation;
