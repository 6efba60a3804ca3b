//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده‌ای برای نگهداری تنظیمات
//! - **Derive Macros**: تولید خودکار کد با `#[derive(...)]`
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// تنظیمات اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(...)]`: macro برای تولید خودکار implementation
/// - `Clone`: اجازه کپی کردن (deep copy)
/// - `Serialize/Deserialize`: تبدیل به/از JSON و فرمت‌های دیگه
///
/// # مثال
/// ```rust
/// use user_service::config::Config;
///
/// let config = Config::default();
/// println!("Port: {}", config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس اتصال به MongoDB
    pub database_url: String,

    /// نام دیتابیس
    pub database_name: String,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
///
/// # مفاهیم:
/// - `enum`: نوع داده شمارشی
/// - `#[serde(rename_all = "lowercase")]`: تغییر نام‌گذاری در سریالایز
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه - با قابلیت‌های دیباگ
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - بهینه‌سازی شده
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// # مفاهیم:
/// - `impl From<T>`: پیاده‌سازی trait تبدیل
/// - `_`: wildcard برای بقیه حالت‌ها
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

/// مقادیر پیش‌فرض برای Config
///
/// مقادیر پیش‌فرض همون ثابت‌های کلاسیک سرویس هستن:
/// سرور روی پورت 9000 و MongoDB محلی
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
            database_url: "mongodb://localhost:27017".to_string(),
            database_name: "userdb".to_string(),
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # مفاهیم:
    /// - `env::var()`: خوندن متغیر محیطی
    /// - `unwrap_or_else`: مقدار پیش‌فرض با closure
    /// - `parse()`: تبدیل String به نوع‌های دیگه
    ///
    /// # Errors
    /// در حال حاضر همه متغیرها default دارن و این متد fail نمیشه،
    /// ولی امضای Result رو نگه میداریم تا متغیر اجباری اضافه کردن راحت باشه
    ///
    /// # مثال
    /// ```rust,no_run
    /// use user_service::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load config");
    /// ```
    pub fn from_env() -> Result<Self> {
        // helper function برای خوندن متغیر محیطی با default
        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        // helper برای parse کردن عدد
        let parse_env = |key: &str, default: u32| -> u32 {
            env::var(key)
                .ok()                           // تبدیل Result به Option
                .and_then(|v| v.parse().ok())   // parse و تبدیل به Option
                .unwrap_or(default)             // مقدار پیش‌فرض
        };

        Ok(Self {
            host: get_env("HOST", "127.0.0.1"),
            port: parse_env("PORT", 9000) as u16,
            database_url: get_env("DATABASE_URL", "mongodb://localhost:27017"),
            database_name: get_env("DATABASE_NAME", "userdb"),
            environment: get_env("ENVIRONMENT", "development").into(),
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # مفاهیم:
    /// - Early return: برگشت زودهنگام در صورت خطا
    pub fn validate(&self) -> Result<()> {
        // چک کردن port
        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        // آدرس دیتابیس باید یک connection string معتبر MongoDB باشه
        if !self.database_url.starts_with("mongodb://")
            && !self.database_url.starts_with("mongodb+srv://")
        {
            return Err(AppError::Config(format!(
                "DATABASE_URL must start with mongodb:// or mongodb+srv://, got '{}'",
                self.database_url
            )));
        }

        // نام دیتابیس نباید خالی باشه
        if self.database_name.is_empty() {
            return Err(AppError::Config("DATABASE_NAME cannot be empty".to_string()));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    ///
    /// # مفاهیم:
    /// - `format!`: ماکرو برای ساخت String
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مفاهیم:
/// - Builder Pattern: ساخت تدریجی یک object
/// - Method Chaining: زنجیره‌ای کردن متدها
/// - Consuming self: گرفتن ownership در هر متد
///
/// # مثال
/// ```rust
/// use user_service::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم database_url
    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// تنظیم نام دیتابیس
    #[must_use]
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.config.database_name = name.into();
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    /// تست ساخت config با مقادیر پیش‌فرض
    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_name, "userdb");
    }

    /// تست Builder Pattern
    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .database_name("test_users")
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database_name, "test_users");
    }

    /// تست تبدیل Environment
    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("PROD".to_string()), Environment::Production);
        assert_eq!(Environment::from("development".to_string()), Environment::Development);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
    }

    /// تست اعتبارسنجی آدرس دیتابیس
    #[test]
    fn test_validation_rejects_non_mongodb_url() {
        let config = ConfigBuilder::new()
            .database_url("postgres://localhost/users")
            .build();

        assert!(config.validate().is_err());
    }

    /// آدرس‌های mongodb و mongodb+srv هر دو معتبرن
    #[test]
    fn test_validation_accepts_mongodb_urls() {
        let plain = ConfigBuilder::new()
            .database_url("mongodb://localhost:27017")
            .build();
        let srv = ConfigBuilder::new()
            .database_url("mongodb+srv://cluster.example.com")
            .build();

        assert!(plain.validate().is_ok());
        assert!(srv.validate().is_ok());
    }

    /// تست server_addr
    #[test]
    fn test_server_addr() {
        let config = ConfigBuilder::new().host("0.0.0.0").port(9000).build();
        assert_eq!(config.server_addr(), "0.0.0.0:9000");
    }
}
