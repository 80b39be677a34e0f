//! 注册表单校验
//!
//! 按固定顺序检查五条规则，遇到第一条不满足的规则即返回，
//! 每次提交最多只报告一个错误。

use super::model::FormInput;
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_FULL_NAME_CHARS: usize = 3;
pub const MIN_AGE: f64 = 18.0;
pub const MIN_ADDRESS_CHARS: usize = 10;

// 浏览器正则中的空白字符集合，含 U+FEFF，不含 U+0085
const NON_SPACE: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// 非空白字符 + '@' + 非空白字符 + '.' + 非空白字符，不要求整串匹配
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{0}+@{0}+\.{0}+", NON_SPACE))
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// 校验失败的原因，五种情况互斥，与规则一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Full Name must be at least 3 characters.")]
    FullNameTooShort,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Age must be a number and at least 18.")]
    InvalidAge,
    #[error("Please select a gender.")]
    MissingGender,
    #[error("Address must be at least 10 characters.")]
    AddressTooShort,
}

/// 校验表单，返回第一条不满足的规则
pub fn validate(input: &FormInput) -> Result<(), Rejection> {
    if text_length(&input.full_name) < MIN_FULL_NAME_CHARS {
        return Err(Rejection::FullNameTooShort);
    }
    if !is_valid_email(&input.email) {
        return Err(Rejection::InvalidEmail);
    }
    match parse_age(&input.age) {
        Some(age) if age >= MIN_AGE => {}
        _ => return Err(Rejection::InvalidAge),
    }
    if input.gender.is_empty() {
        return Err(Rejection::MissingGender);
    }
    if text_length(&input.address) < MIN_ADDRESS_CHARS {
        return Err(Rejection::AddressTooShort);
    }
    Ok(())
}

/// 文本长度，按 UTF-16 码元计数，基本多文种平面以外的字符（如 emoji）计为 2
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// 解析年龄文本
///
/// 忽略首尾空白后按十进制数解析，允许小数和指数形式（"18.5"、"1e2"）。
/// 空串、"18abc"、"inf"、"NaN" 都不算数字。
pub fn parse_age(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|age| age.is_finite())
}
