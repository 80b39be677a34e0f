//! 应用层

pub mod registration;
pub mod router;
