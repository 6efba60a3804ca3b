//! # User Handlers
//!
//! سه handler مستقل: گرفتن، ساختن و حذف کاربر.
//! هر کدوم یک عملیات دیتابیس انجام میدن و مستقل از بقیه هستن.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::oid::ObjectId;
use tracing::info;

use crate::{
    api::AppState,
    error::{AppError, OptionExt, Result},
    models::{CreateUserRequest, User, UserResponse},
};

// =====================================
// Get User
// =====================================
/// گرفتن کاربر با شناسه
///
/// # مفاهیم:
/// - `Path<String>`: استخراج پارامتر از URL
/// - `State<AppState>`: استخراج state از request
///
/// # Endpoint
/// `GET /user/:id`
///
/// # Response
/// - 200 با JSON کاربر
/// - 404 با بدنه خالی اگه شناسه نامعتبر باشه یا کاربری پیدا نشه
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>> {
    // شناسه نامعتبر همون جواب رکورد ناموجود رو میگیره: 404 با بدنه خالی
    // این چک قبل از هر تماسی با دیتابیس انجام میشه
    let oid = ObjectId::parse_str(&id).map_err(|_| AppError::NotFound)?;

    let user = state.users.find_by_id(oid).await?.ok_or_not_found()?;

    Ok(Json(UserResponse::from(user)))
}

// =====================================
// Create User
// =====================================
/// ساخت کاربر جدید
///
/// # مفاهیم:
/// - `Result<Json<T>, JsonRejection>`: به جای fail شدن extractor،
///   خطای decode به خود handler میرسه تا با متنش جواب 400 بسازه
/// - شناسه همیشه همینجا تولید میشه؛ id احتمالی کلاینت بی‌صدا کنار گذاشته میشه
///
/// # Endpoint
/// `POST /user`
///
/// # Request Body
/// ```json
/// {
///   "name": "Ada",
///   "gender": "F",
///   "age": 30
/// }
/// ```
///
/// # Response
/// - 201 با JSON کاربر (شامل شناسه تولید شده)
/// - 400 با متن خطای decode اگه بدنه JSON معتبر نباشه
/// - 500 با متن خطا اگه درج در دیتابیس fail بشه
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    // خطای decode با متنش به کلاینت برمیگرده
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // تولید شناسه تازه و درج
    let user = User::new(request);
    state.users.insert(&user).await?;

    info!(user_id = %user.id, "User created");

    // برگردوندن response با status 201 Created
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// =====================================
// Delete User
// =====================================
/// حذف کاربر با شناسه
///
/// # Endpoint
/// `DELETE /user/:id`
///
/// # Response
/// - 200 با متن ساده `Deleted user: <id>`
/// - 400 با بدنه خالی اگه شناسه نامعتبر باشه
/// - 404 با بدنه خالی اگه سندی با این شناسه وجود نداشته باشه
/// - 500 با متن خطا اگه خود عملیات حذف fail بشه
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String> {
    // برخلاف get، شناسه نامعتبر اینجا 400 میگیره
    let oid = ObjectId::parse_str(&id).map_err(|_| AppError::MalformedId(id))?;

    // حذف بدون چک قبلی وجود سند؛ نتیجه میگه چیزی حذف شد یا نه
    if !state.users.delete_by_id(oid).await? {
        return Err(AppError::NotFound);
    }

    info!(user_id = %oid, "User deleted");

    Ok(format!("Deleted user: {}", oid.to_hex()))
}
