pub mod date;
pub mod error;
pub mod pagination;
pub mod response;
