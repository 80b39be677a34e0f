//! 注册业务服务

use super::model::{Field, FormInput, UserRecord};
use super::render::DisplayEntry;
use super::validator::{validate, Rejection};
use tracing::{debug, info};

/// 注册编号序列，从 1 开始单调递增，编号不会重复使用
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub const PREFIX: &'static str = "USR";

    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// 下一次接受提交时将分配的编号
    pub fn peek(&self) -> String {
        format!("{}{}", Self::PREFIX, self.next)
    }

    fn mint(&mut self) -> String {
        let id = self.peek();
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// 注册台：持有表单草稿、已接受的注册列表和编号序列
#[derive(Debug, Clone, Default)]
pub struct RegistrationDesk {
    draft: FormInput,
    submissions: Vec<UserRecord>,
    ids: IdSequence,
}

impl RegistrationDesk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormInput {
        &self.draft
    }

    pub fn submissions(&self) -> &[UserRecord] {
        &self.submissions
    }

    /// 修改单个字段，原样保存，不做校验
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!(field = %field, "更新表单字段");
        self.draft.set(field, value);
    }

    /// 清空表单草稿，不影响注册列表
    pub fn clear(&mut self) {
        self.draft = FormInput::blank();
    }

    /// 提交当前草稿
    ///
    /// 校验通过时分配编号、追加到列表末尾并清空草稿；
    /// 校验失败时草稿、列表和编号序列都保持不变。
    pub fn submit(&mut self) -> Result<UserRecord, Rejection> {
        if let Err(rejection) = validate(&self.draft) {
            debug!(reason = %rejection, "注册被拒绝");
            return Err(rejection);
        }

        let input = std::mem::take(&mut self.draft);
        let record = UserRecord::new(self.ids.mint(), input);
        self.submissions.push(record.clone());

        info!(id = record.id(), total = self.submissions.len(), "✅ 新用户注册成功");
        Ok(record)
    }

    /// 用整张表单的值逐字段覆盖草稿后提交，对应页面表单的一次 POST
    pub fn submit_input(&mut self, input: FormInput) -> Result<UserRecord, Rejection> {
        for field in Field::ALL {
            self.edit(field, input.get(field));
        }
        self.submit()
    }

    /// 按提交顺序遍历注册列表的展示条目，可重复调用
    pub fn entries(&self) -> impl Iterator<Item = DisplayEntry<'_>> + Clone + '_ {
        self.submissions.iter().map(DisplayEntry::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(desk: &mut RegistrationDesk) {
        desk.edit(Field::FullName, "Jordan Lee");
        desk.edit(Field::Email, "a@b.com");
        desk.edit(Field::Age, "25");
        desk.edit(Field::Gender, "Male");
        desk.edit(Field::Address, "123 Main Street");
    }

    #[test]
    fn test_accepted_submission_appends_and_resets() {
        let mut desk = RegistrationDesk::new();
        fill_valid(&mut desk);
        let expected_input = desk.draft().clone();

        let record = desk.submit().unwrap();

        assert_eq!(record.id(), "USR1");
        for field in Field::ALL {
            assert_eq!(record.get(field), expected_input.get(field));
        }
        assert_eq!(desk.submissions(), &[record]);
        assert!(desk.draft().is_blank());
    }

    #[test]
    fn test_rejected_submission_leaves_state_unchanged() {
        let mut desk = RegistrationDesk::new();
        fill_valid(&mut desk);
        desk.edit(Field::Age, "17");
        let before = desk.draft().clone();

        assert_eq!(desk.submit(), Err(Rejection::InvalidAge));
        assert_eq!(desk.submit(), Err(Rejection::InvalidAge));

        assert!(desk.submissions().is_empty());
        assert_eq!(desk.draft(), &before);
        assert_eq!(desk.ids.peek(), "USR1");
    }

    #[test]
    fn test_ids_are_sequential_and_skip_rejections() {
        let mut desk = RegistrationDesk::new();

        fill_valid(&mut desk);
        assert_eq!(desk.submit().unwrap().id(), "USR1");

        // 空白表单被拒绝，不消耗编号
        assert_eq!(desk.submit(), Err(Rejection::FullNameTooShort));

        fill_valid(&mut desk);
        desk.edit(Field::FullName, "Alex Kim");
        assert_eq!(desk.submit().unwrap().id(), "USR2");

        let ids: Vec<&str> = desk.submissions().iter().map(UserRecord::id).collect();
        assert_eq!(ids, ["USR1", "USR2"]);
    }

    #[test]
    fn test_desks_do_not_share_counters() {
        let mut first = RegistrationDesk::new();
        let mut second = RegistrationDesk::new();

        fill_valid(&mut first);
        first.submit().unwrap();
        fill_valid(&mut first);
        first.submit().unwrap();

        fill_valid(&mut second);
        assert_eq!(second.submit().unwrap().id(), "USR1");
    }

    #[test]
    fn test_submit_input_keeps_posted_values_on_rejection() {
        let mut desk = RegistrationDesk::new();
        let posted = FormInput {
            full_name: "Jordan Lee".to_string(),
            email: "bad-email".to_string(),
            age: "25".to_string(),
            gender: "Female".to_string(),
            address: "123 Main Street".to_string(),
        };

        assert_eq!(desk.submit_input(posted.clone()), Err(Rejection::InvalidEmail));
        assert_eq!(desk.draft(), &posted);

        let mut fixed = posted;
        fixed.email = "jordan@example.com".to_string();
        let record = desk.submit_input(fixed).unwrap();
        assert_eq!(record.email(), "jordan@example.com");
        assert!(desk.draft().is_blank());
    }

    #[test]
    fn test_clear_only_resets_draft() {
        let mut desk = RegistrationDesk::new();
        fill_valid(&mut desk);
        desk.submit().unwrap();

        desk.edit(Field::FullName, "Half typed");
        desk.clear();

        assert!(desk.draft().is_blank());
        assert_eq!(desk.submissions().len(), 1);
    }

    #[test]
    fn test_entries_are_restartable() {
        let mut desk = RegistrationDesk::new();
        fill_valid(&mut desk);
        desk.submit().unwrap();
        fill_valid(&mut desk);
        desk.submit().unwrap();

        let entries = desk.entries();
        let first_pass: Vec<String> = entries.clone().map(|e| e.heading()).collect();
        let second_pass: Vec<String> = entries.map(|e| e.heading()).collect();
        assert_eq!(first_pass, ["User ID: USR1", "User ID: USR2"]);
        assert_eq!(first_pass, second_pass);
    }
}
