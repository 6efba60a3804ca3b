//! # User Service - نقطه ورود برنامه
//!
//! این فایل نقطه شروع اجرای برنامه است.
//! در Rust، `main.rs` برای باینری‌ها و `lib.rs` برای کتابخانه‌ها استفاده میشه.
//!
//! ## مفاهیم Rust در این فایل:
//! - `async fn main()`: تابع اصلی غیرهمزمان با tokio
//! - `Result<T, E>`: مدیریت خطا
//! - `?` operator: انتشار خطا به بالا

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// وارد کردن ماژول‌ها از کتابخانه‌مون
use user_service::{api::create_router, config::Config, database::Database, error::Result};

/// نقطه ورود اصلی برنامه
///
/// # مفاهیم مهم:
/// - `#[tokio::main]`: این macro تابع async رو به یک runtime تبدیل میکنه
/// - `async fn`: تابع غیرهمزمان که میتونه await داشته باشه
/// - `Result<()>`: برگردوندن Result بدون مقدار موفقیت (unit type)
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات لود نشن
/// - دیتابیس متصل نشه یا ping جواب نده
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // لود کردن متغیرهای محیطی از فایل .env
    // اگه فایل نباشه اوکیه
    dotenvy::dotenv().ok();

    // راه‌اندازی سیستم لاگینگ
    init_tracing();

    info!("🚀 Starting User Service...");

    // لود کردن تنظیمات
    // `?` یعنی اگه خطا بود، همینجا return کن
    let config = Config::from_env()?;
    config.validate()?;
    info!("✅ Configuration loaded successfully");

    // اتصال به MongoDB
    let database = Database::connect(&config).await?;
    info!("✅ Database client created");

    // چک اولیه اتصال - اگه ping جواب نده، استارت‌آپ همینجا fatal میشه
    database.ping().await?;
    info!("✅ Database connection verified");

    // ساخت router با تمام route‌ها و middleware‌ها
    // این یه نمونه از Dependency Injection هست
    let app = create_router(database, config.clone());

    // آدرس سرور
    let addr = config.server_addr();
    info!("🌐 Server listening on http://{}", addr);

    // ساخت listener و اجرای سرور
    let listener = TcpListener::bind(&addr).await?;

    // اجرای سرور - این بلاک تا ابد اجرا میشه
    axum::serve(listener, app)
        .await
        .map_err(|e| user_service::error::AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// # مفاهیم:
/// - Structured Logging: لاگ‌ها به صورت ساختاریافته ذخیره میشن
/// - Layers: لایه‌های مختلف برای فرمت و فیلتر کردن
/// - EnvFilter: فیلتر کردن لاگ‌ها بر اساس متغیر محیطی
fn init_tracing() {
    // EnvFilter از متغیر RUST_LOG میخونه
    // اگه نبود، default استفاده میکنه
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("user_service=debug,tower_http=debug"));

    // ترکیب لایه‌ها با هم
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)      // نمایش نام ماژول
                .with_level(true)       // نمایش سطح لاگ
                .pretty(),              // فرمت زیبا
        )
        .init();
}
