//! 注册处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
    Form,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

use super::{
    model::{Field, FormInput, UserRecord},
    render::{self, Notice},
    service::RegistrationDesk,
};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone, Default)]
pub struct AppState {
    desk: Arc<Mutex<RegistrationDesk>>,
}

impl AppState {
    pub fn new(desk: RegistrationDesk) -> Self {
        Self {
            desk: Arc::new(Mutex::new(desk)),
        }
    }

    /// 每次编辑或提交都在同一把锁内完成
    pub fn desk(&self) -> Result<MutexGuard<'_, RegistrationDesk>, CoreError> {
        self.desk
            .lock()
            .map_err(|_| CoreError::InternalServerError("注册台状态已损坏".to_string()))
    }
}

/// 修改字段请求
#[derive(Debug, Deserialize)]
pub struct EditFieldRequest {
    pub value: String,
}

/// 注册页面
pub async fn show_page(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let desk = state.desk()?;
    Ok(Html(render::page(&desk, None)))
}

/// 页面表单提交，校验失败时以 422 返回带提示的页面，已填写的值保留
pub async fn submit_page(
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> Result<(StatusCode, Html<String>), CoreError> {
    let mut desk = state.desk()?;
    let response = match desk.submit_input(input) {
        Ok(record) => (
            StatusCode::OK,
            Html(render::page(&desk, Some(Notice::Accepted(record.id())))),
        ),
        Err(rejection) => {
            let message = rejection.to_string();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::page(&desk, Some(Notice::Rejected(&message)))),
            )
        }
    };
    Ok(response)
}

pub async fn get_form(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FormInput>>, CoreError> {
    let desk = state.desk()?;
    Ok(Json(ApiResponse::success(desk.draft().clone())))
}

pub async fn edit_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(request): Json<EditFieldRequest>,
) -> Result<Json<ApiResponse<FormInput>>, CoreError> {
    let field: Field = field.parse().map_err(|err| {
        warn!("{}", err);
        CoreError::from(err)
    })?;

    let mut desk = state.desk()?;
    desk.edit(field, request.value);
    Ok(Json(ApiResponse::success(desk.draft().clone())))
}

pub async fn clear_form(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FormInput>>, CoreError> {
    let mut desk = state.desk()?;
    desk.clear();
    Ok(Json(ApiResponse::success(desk.draft().clone())))
}

/// 提交草稿，成功返回 201 和新记录，失败返回 422 和校验消息
pub async fn submit_draft(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<UserRecord>>), CoreError> {
    let mut desk = state.desk()?;
    let record = desk.submit()?;
    let message = format!("Registered {}", record.id());
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(record).with_message(message)),
    ))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserRecord>>>, CoreError> {
    let desk = state.desk()?;
    Ok(Json(ApiResponse::success(desk.submissions().to_vec())))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
