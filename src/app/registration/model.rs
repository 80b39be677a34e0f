//! 注册数据模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 表单中的五个输入项，名称与页面控件的 `name` 属性一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Age,
    Gender,
    Address,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Age,
        Field::Gender,
        Field::Address,
    ];

    /// 控件的 `name` 属性
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Address => "address",
        }
    }

    /// 页面上显示的标签
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("未知的表单字段: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// 性别下拉框的可选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const OPTIONS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// 表单当前的输入值
///
/// 所有字段都按原样保存用户输入，不做任何转换；年龄仅在校验时解析。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInput {
    pub full_name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub address: String,
}

impl FormInput {
    /// 空白表单
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::blank()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
        }
    }

    /// 替换单个字段的值，其余字段保持不变
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::Address => &mut self.address,
        };
        *slot = value.into();
    }
}

/// 已接受的注册记录，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    id: String,
    full_name: String,
    email: String,
    age: String,
    gender: String,
    address: String,
}

impl UserRecord {
    pub(crate) fn new(id: String, input: FormInput) -> Self {
        Self {
            id,
            full_name: input.full_name,
            email: input.email,
            age: input.age,
            gender: input.gender,
            address: input.address,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert_eq!(
            "phone".parse::<Field>().unwrap_err(),
            UnknownField("phone".to_string())
        );
    }

    #[test]
    fn test_set_replaces_only_one_field() {
        let mut input = FormInput::blank();
        input.set(Field::Email, "a@b.com");
        input.set(Field::FullName, "  Jordan  ");

        assert_eq!(input.email, "a@b.com");
        // 原样保存，不去除空白
        assert_eq!(input.full_name, "  Jordan  ");
        assert_eq!(input.age, "");
        assert_eq!(input.gender, "");
        assert_eq!(input.address, "");

        input.set(Field::Email, "c@d.org");
        assert_eq!(input.get(Field::Email), "c@d.org");
        assert_eq!(input.get(Field::FullName), "  Jordan  ");
    }

    #[test]
    fn test_form_input_uses_camel_case_json() {
        let input: FormInput =
            serde_json::from_str(r#"{"fullName":"Jordan Lee","gender":"Other"}"#).unwrap();
        assert_eq!(input.full_name, "Jordan Lee");
        assert_eq!(input.gender, "Other");
        assert_eq!(input.email, "");

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["fullName"], "Jordan Lee");
    }
}
