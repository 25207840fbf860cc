pub mod deprecation;
pub mod error;
pub mod inline;
pub mod layout;
