//! # 用户注册台
//!
//! 一个单页注册表单：收集姓名、邮箱、年龄、性别、地址五个字段，
//! 按固定规则校验，校验通过的提交追加到内存中的注册列表并渲染回页面。
//!
//! 分层结构：
//! - `app`：注册业务（数据模型、校验、提交、渲染、HTTP 处理器）
//! - `core`：错误、响应、中间件
//! - `infrastructure`：配置、日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::registration::{
    model::{Field, FormInput, Gender, UserRecord},
    render::DisplayEntry,
    service::{IdSequence, RegistrationDesk},
    validator::{validate, Rejection},
};
pub use app::router::build_router;
