//! 注册流程演示
//! 在全新的注册台上依次执行几组典型输入，并记录每次提交的结果

use tracing::{info, warn};
use user_registration::infrastructure::{config::LoggingConfig, logger::Logger};
use user_registration::{FormInput, RegistrationDesk};

fn input(full_name: &str, email: &str, age: &str) -> FormInput {
    FormInput {
        full_name: full_name.to_string(),
        email: email.to_string(),
        age: age.to_string(),
        gender: "Male".to_string(),
        address: "123 Main Street".to_string(),
    }
}

fn main() {
    Logger::init(&LoggingConfig::default());

    let mut desk = RegistrationDesk::new();
    let attempts = [
        ("名字过短", input("Jo", "a@b.com", "25")),
        ("邮箱格式错误", input("Jordan Lee", "bad-email", "25")),
        ("未满 18 岁", input("Jordan Lee", "a@b.com", "17")),
        ("有效输入", input("Jordan Lee", "a@b.com", "25")),
        ("第二个有效输入", input("Alex Kim", "alex@example.org", "31")),
    ];

    for (label, attempt) in attempts {
        match desk.submit_input(attempt) {
            Ok(record) => info!("{}: 已接受，编号 {}", label, record.id()),
            Err(rejection) => warn!("{}: 已拒绝，{}", label, rejection),
        }
    }

    info!("📋 当前共有 {} 位注册用户:", desk.submissions().len());
    for entry in desk.entries() {
        info!("{}", entry.heading());
        for (label, value) in entry.rows() {
            info!("   {}: {}", label, value);
        }
    }
}
