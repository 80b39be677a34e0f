//! 用户注册：表单编辑、校验、提交与列表渲染

pub mod handler;
pub mod model;
pub mod render;
pub mod service;
pub mod validator;
