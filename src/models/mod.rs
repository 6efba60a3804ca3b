//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: داده‌ای که در دیتابیس ذخیره میشه (`User`)
//! - **DTO (Data Transfer Object)**: برای ارسال/دریافت از API
//!   (`CreateUserRequest`, `UserResponse`)

mod user;

// Re-export همه مدل‌ها
pub use user::*;
