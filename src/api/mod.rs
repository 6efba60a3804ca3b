//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Handler Functions**: پردازش request‌ها
//! - **Extractors**: استخراج داده از request
//! - **State**: اشتراک state بین handlers
//! - **Tower**: زیرساخت middleware
//!
//! ## ساختار URL‌ها:
//! - `GET /user/:id` - گرفتن کاربر با شناسه
//! - `POST /user` - ساخت کاربر جدید
//! - `DELETE /user/:id` - حذف کاربر با شناسه

mod handlers;

pub use handlers::*;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    database::{Database, UserRepository},
};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: برای هر request یه کپی ارزون ساخته میشه
/// - این state در axum با `State` به handler تزریق میشه -
///   هیچ global state‌ای وجود نداره
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// repository کاربرها
    pub users: UserRepository,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Dependency Injection: همه وابستگی‌ها تزریق میشن
    #[must_use]
    pub fn new(db: &Database, config: Config) -> Self {
        Self {
            config: Arc::new(config),
            users: UserRepository::new(db),
        }
    }
}

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `Router::new()`: شروع router خالی
/// - `.route()`: اضافه کردن route
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
///
/// توجه: عمدا هیچ timeout middleware‌ای نداریم - هر عملیات دیتابیس
/// بدون deadline اجرا میشه.
///
/// # Arguments
/// * `db` - اتصال دیتابیس
/// * `config` - تنظیمات برنامه
pub fn create_router(db: Database, config: Config) -> Router {
    // ساخت AppState
    let state = AppState::new(&db, config);

    Router::new()
        // گرفتن و حذف کاربر با شناسه
        .route(
            "/user/:id",
            get(handlers::user::get_user).delete(handlers::user::delete_user),
        )
        // ساخت کاربر جدید
        .route("/user", post(handlers::user::create_user))
        // Middleware‌های عمومی
        .layer(
            ServiceBuilder::new()
                // Tracing - لاگ کردن request‌ها
                .layer(TraceLayer::new_for_http())
                // CORS - اجازه دسترسی از دامنه‌های دیگه
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        // تزریق state به همه handlers
        .with_state(state)
}
