//! # مدل کاربر (User Model)
//!
//! Entity و DTO‌های مربوط به کاربر
//!
//! ## مفاهیم:
//! - **ObjectId**: شناسه 12 بایتی MongoDB (timestamp + entropy + counter)
//! - دو شکل سریالایز متفاوت: BSON برای دیتابیس، JSON برای API
//! - در BSON شناسه زیر فیلد `_id` ذخیره میشه؛ در JSON به صورت
//!   رشته hex با 24 کاراکتر زیر فیلد `id` برمیگرده

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// =====================================
// User Entity
// =====================================
/// Entity کاربر - شکل ذخیره شده در دیتابیس
///
/// # مفاهیم:
/// - `#[serde(rename = "_id")]`: نگاشت فیلد به قرارداد MongoDB
/// - این struct فقط با BSON سریالایز میشه (از طریق `Collection<User>`)؛
///   برای پاسخ HTTP از [`UserResponse`] استفاده کنید
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// شناسه یکتا - بعد از ساخت هیچوقت عوض نمیشه
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,
    pub gender: String,
    pub age: i32,
}

impl User {
    /// ساخت کاربر جدید از درخواست، با شناسه تازه
    ///
    /// # مفاهیم:
    /// - `ObjectId::new()`: تولید شناسه یکتای 12 بایتی
    /// - شناسه همیشه اینجا تولید میشه؛ مقدار احتمالی کلاینت نادیده گرفته میشه
    #[must_use]
    pub fn new(request: CreateUserRequest) -> Self {
        Self {
            id: ObjectId::new(),
            name: request.name,
            gender: request.gender,
            age: request.age,
        }
    }
}

/// تبدیل User به UserResponse
///
/// # مفاهیم:
/// - `impl From<T>`: تبدیل خودکار با `into()`
/// - شناسه به رشته hex با 24 کاراکتر تبدیل میشه
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            gender: user.gender,
            age: user.age,
        }
    }
}

/// تبدیل &User به UserResponse
impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name.clone(),
            gender: user.gender.clone(),
            age: user.age,
        }
    }
}

// =====================================
// API Request DTOs
// =====================================
/// بدنه درخواست ساخت کاربر
///
/// فیلد `id` در بدنه جایی نداره: اگه کلاینت بفرسته، serde نادیده‌ش
/// میگیره و سرویس همیشه شناسه خودش رو تولید میکنه.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub gender: String,
    pub age: i32,
}

// =====================================
// API Response DTOs
// =====================================
/// پاسخ اطلاعات کاربر - شکل JSON روی wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    /// شناسه به صورت hex با 24 کاراکتر
    pub id: String,

    pub name: String,
    pub gender: String,
    pub age: i32,
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;
    use pretty_assertions::assert_eq;

    fn sample_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Ada".to_string(),
            gender: "F".to_string(),
            age: 30,
        }
    }

    /// هر بار ساخت، شناسه تازه میگیره - حتی با فیلدهای یکسان
    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new(sample_request());
        let b = User::new(sample_request());

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    /// در BSON شناسه باید زیر `_id` و از نوع ObjectId باشه
    #[test]
    fn test_user_bson_shape() {
        let user = User::new(sample_request());
        let doc = bson::to_document(&user).unwrap();

        assert_eq!(doc.get_object_id("_id").unwrap(), user.id);
        assert_eq!(doc.get_str("name").unwrap(), "Ada");
        assert_eq!(doc.get_str("gender").unwrap(), "F");
        assert_eq!(doc.get_i32("age").unwrap(), 30);
    }

    /// رفت و برگشت BSON باید بدون تغییر باشه
    #[test]
    fn test_user_bson_roundtrip() {
        let user = User::new(sample_request());
        let doc = bson::to_document(&user).unwrap();
        let back: User = bson::from_document(doc).unwrap();

        assert_eq!(back, user);
    }

    /// در JSON پاسخ، شناسه باید رشته hex با 24 کاراکتر باشه
    #[test]
    fn test_response_json_shape() {
        let user = User::new(sample_request());
        let response = UserResponse::from(&user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], serde_json::json!(user.id.to_hex()));
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
        assert_eq!(json["name"], serde_json::json!("Ada"));
        assert_eq!(json["gender"], serde_json::json!("F"));
        assert_eq!(json["age"], serde_json::json!(30));
    }

    /// فیلد id در بدنه درخواست نادیده گرفته میشه
    #[test]
    fn test_create_request_ignores_client_id() {
        let body = r#"{"id":"aaaaaaaaaaaaaaaaaaaaaaaa","name":"Ada","gender":"F","age":30}"#;
        let request: CreateUserRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.name, "Ada");
        assert_eq!(request.age, 30);
    }

    /// بدنه با شکل اشتباه باید با خطای decode رد بشه
    #[test]
    fn test_create_request_rejects_wrong_shape() {
        let wrong_type = r#"{"name":"Ada","gender":"F","age":"thirty"}"#;
        let missing_field = r#"{"name":"Ada"}"#;

        assert!(serde_json::from_str::<CreateUserRequest>(wrong_type).is_err());
        assert!(serde_json::from_str::<CreateUserRequest>(missing_field).is_err());
    }
}
