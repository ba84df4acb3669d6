//! 领域模型
//!
//! 包含优惠券、折扣策略和用户记录的实体定义

pub mod discount;
pub mod enums;
pub mod user;
pub mod voucher;

pub use discount::DiscountPolicy;
pub use enums::{UnknownDiscriminator, VoucherStatus, VoucherType};
pub use user::User;
pub use voucher::{EXPIRATION_PRECISION, SUMMARY_DELIMITER, Voucher, truncate_expiration};
