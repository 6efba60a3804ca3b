//! # HTTP Handlers
//!
//! این ماژول handler‌های HTTP رو تعریف میکنه.
//!
//! ## Handler چیه؟
//! تابعی که request میگیره و response برمیگردونه.
//! در axum، هر handler یک async function هست.
//!
//! هر handler اینجا دقیقا یک عملیات دیتابیس انجام میده و نتیجه رو
//! به JSON (یا متن ساده) تبدیل میکنه - نه منطق بیشتری، نه state‌ای.

pub mod user;
