//! 核心响应处理模块
//!
//! 注册接口统一用 `ApiResponse` 包装返回数据；提交成功等需要提示用户的场景
//! 附带一条 `message`，与页面上的提示横幅对应。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub request_id: String,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_omitted_when_absent() {
        let json = serde_json::to_value(ApiResponse::success(vec!["USR1"])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "USR1");
        assert!(json.get("message").is_none());
        assert!(Uuid::parse_str(json["request_id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_with_message() {
        let json = serde_json::to_value(ApiResponse::success(()).with_message("Registered USR1"))
            .unwrap();
        assert_eq!(json["message"], "Registered USR1");
    }
}
