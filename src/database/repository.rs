//! # Repository Pattern
//!
//! این فایل الگوی Repository رو پیاده‌سازی میکنه.
//!
//! ## Repository Pattern چیه؟
//! یه لایه انتزاعی بین handler‌ها و دیتابیس.
//! - handler نمیدونه داده کجا و چطور ذخیره میشه
//! - تست کردن راحت‌تر میشه
//!
//! هر متد دقیقا یک عملیات دیتابیس انجام میده - نه بیشتر.

use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use super::Database;
use crate::error::Result;
use crate::models::User;

/// نام collection کاربرها
pub const USERS_COLLECTION: &str = "users";

// =====================================
// User Repository
// =====================================
/// Repository برای مدیریت کاربران
///
/// # مفاهیم:
/// - Struct با dependency injection
/// - `Collection<User>` به صورت typed: سریالایز/دسریالایز BSON خودکاره
#[derive(Debug, Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// ساخت repository جدید
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }

    /// پیدا کردن کاربر با شناسه
    ///
    /// # مفاهیم:
    /// - `find_one`: برگردوندن Option (صفر یا یک نتیجه)
    /// - نبودن سند خطا نیست؛ `None` برمیگرده
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>> {
        let user = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(user)
    }

    /// درج کاربر جدید
    ///
    /// شناسه باید از قبل روی `user` تنظیم شده باشه
    pub async fn insert(&self, user: &User) -> Result<()> {
        self.collection.insert_one(user).await?;
        Ok(())
    }

    /// حذف کاربر با شناسه
    ///
    /// حذفی که با هیچ سندی match نشه از نظر درایور خطا نیست؛
    /// برای همین `bool` برمیگردونیم که caller بتونه تفاوت رو ببینه.
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
