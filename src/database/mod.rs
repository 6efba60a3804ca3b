//! # ماژول دیتابیس (Database Layer)
//!
//! این ماژول لایه ارتباط با MongoDB رو مدیریت میکنه.
//!
//! ## مفاهیم Rust:
//! - **async/await**: برنامه‌نویسی غیرهمزمان
//! - **Clone ارزون**: handle‌های درایور داخلا reference-counted هستن،
//!   پس clone کردنشون فقط یه counter رو زیاد میکنه
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - یک client در کل عمر پروسه ساخته میشه و بین همه handler‌ها share میشه

mod repository;

pub use repository::*;

use crate::config::Config;
use crate::error::Result;
use mongodb::{bson::doc, Client, Collection};

// =====================================
// Database Connection
// =====================================
/// اتصال به MongoDB
///
/// # مفاهیم:
/// - `#[derive(Clone)]`: Clone implementation
/// - handle انتخاب شده دیتابیس کنار خود client نگه داشته میشه
///
/// ## مدیریت اتصال
/// درایور MongoDB خودش pooling داخلی داره؛ ما نه pool اضافه میسازیم،
/// نه retry، نه reconnect. یک بار وصل میشیم و تا آخر عمر پروسه
/// از همین handle استفاده میکنیم.
#[derive(Debug, Clone)]
pub struct Database {
    /// client اصلی درایور
    client: Client,

    /// handle دیتابیس انتخاب شده
    database: mongodb::Database,
}

impl Database {
    /// اتصال به MongoDB
    ///
    /// # مفاهیم:
    /// - `async fn`: تابع غیرهمزمان
    /// - `Client::with_uri_str`: ساخت client از connection string
    ///
    /// توجه: درایور اتصال رو lazy برقرار میکنه؛ برای چک واقعی اتصال
    /// باید [`Database::ping`] صدا زده بشه.
    ///
    /// # Errors
    /// خطا برمیگردونه اگه connection string قابل parse نباشه
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.database_url).await?;
        let database = client.database(&config.database_name);

        Ok(Self { client, database })
    }

    /// چک اولیه اتصال با دستور ping
    ///
    /// این تنها health check سرویسه و فقط یک بار قبل از serve کردن
    /// ترافیک اجرا میشه؛ fail شدنش استارت‌آپ رو fatal میکنه.
    ///
    /// # Errors
    /// خطا برمیگردونه اگه سرور در دسترس نباشه
    pub async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// دسترسی به client درایور
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// گرفتن یک collection با نوع مشخص
    ///
    /// # مفاهیم:
    /// - Generic: نوع سند collection رو caller تعیین میکنه
    #[must_use]
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}
