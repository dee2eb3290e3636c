pub mod auth;
pub mod employee;
pub mod errors;
pub mod identity;
pub mod page;
pub mod position;
