//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//! - **Error Propagation**: انتشار خطا با `?`
//!
//! ## قرارداد بدنه خطا
//!
//! بدنه پاسخ خطا یا خالیه یا متن خام خطا - بدون schema ساختاریافته.
//! کلاینت فقط status code و در بعضی حالت‌ها متن خطا رو میبینه.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// # مفاهیم:
/// - Type Alias: نام مستعار برای یک نوع
/// - Generic با default: `T` پارامتر، `E` ثابت
///
/// به جای نوشتن `Result<User, AppError>` میتونیم بنویسیم `Result<User>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `enum`: نوع شمارشی با انواع مختلف خطا
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    /// متن خطا به عنوان بدنه پاسخ برمیگرده (مثلا خطای decode بدنه JSON)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// شناسه نامعتبر - 400 با بدنه خالی
    /// شناسه باید یک رشته hex با 24 کاراکتر باشه
    #[error("Malformed user id: {0}")]
    MalformedId(String),

    /// پیدا نشد - 404 با بدنه خالی
    #[error("Not found")]
    NotFound,

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس
    /// `#[from]` یعنی mongodb::error::Error خودکار به این تبدیل میشه
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    ///
    /// # مفاهیم:
    /// - `match`: pattern matching
    /// - `Self::Variant`: مراجعه به variant‌ها
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) | Self::MalformedId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,

            // 5xx Server Errors
            Self::Server(_) | Self::Config(_) | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// متن بدنه پاسخ برای این خطا
    ///
    /// بدنه یا خالیه یا متن خام خطای زیرین - هیچ schema ساختاریافته‌ای نداریم.
    #[must_use]
    pub fn body_text(&self) -> String {
        match self {
            // متن خطای decode مستقیم به کلاینت برمیگرده
            Self::BadRequest(msg) => msg.clone(),

            // متن خام خطای درایور
            Self::Database(e) => e.to_string(),

            // این حالت‌ها بدنه خالی دارن
            Self::MalformedId(_) | Self::NotFound => String::new(),

            // خطاهای استارت‌آپ - در عمل به کلاینت نمیرسن
            other => other.to_string(),
        }
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// # مفاهیم:
/// - `IntoResponse`: trait خاص axum برای تبدیل به response
/// - این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم
///
/// # مثال
/// ```rust,ignore
/// async fn handler() -> Result<Json<Data>, AppError> {
///     // اگه Err برگرده، خودکار به response تبدیل میشه
///     Ok(Json(data))
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // لاگ کردن خطاهای سرور
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        // status به همراه بدنه plain-text (یا خالی)
        (self.status_code(), self.body_text()).into_response()
    }
}

// =====================================
// From Implementations
// =====================================
// این‌ها برای تبدیل خودکار خطاهای دیگه به AppError هستن
// با `?` میتونیم خطا رو propagate کنیم

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Server(s)
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::Server(s.to_string())
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
///
/// # مفاهیم:
/// - Extension Trait: اضافه کردن متد به نوع‌های موجود
pub trait OptionExt<T> {
    /// تبدیل None به AppError::NotFound
    fn ok_or_not_found(self) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> Result<T> {
        self.ok_or(AppError::NotFound)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);

        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            AppError::MalformedId("xyz".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(
            AppError::Server("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// بدنه خطاهای not-found و شناسه نامعتبر باید خالی باشه
    #[test]
    fn test_empty_bodies() {
        assert!(AppError::NotFound.body_text().is_empty());
        assert!(AppError::MalformedId("xyz".to_string()).body_text().is_empty());
    }

    /// متن خطای bad request باید به بدنه منتقل بشه
    #[test]
    fn test_bad_request_body() {
        let err = AppError::BadRequest("could not decode".to_string());
        assert_eq!(err.body_text(), "could not decode");
    }

    #[test]
    fn test_is_server_error() {
        assert!(AppError::Server("test".to_string()).is_server_error());
        assert!(!AppError::NotFound.is_server_error());
    }

    #[test]
    fn test_option_extension() {
        let some_value: Option<i32> = Some(42);
        let none_value: Option<i32> = None;

        assert!(some_value.ok_or_not_found().is_ok());
        assert!(matches!(none_value.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
