//! HTTP 请求处理器

pub mod user;
pub mod voucher;
