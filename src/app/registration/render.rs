//! 注册页面渲染
//!
//! 页面完全由注册台当前状态推导，渲染过程不修改任何状态。

use super::model::{Field, Gender, UserRecord};
use super::service::RegistrationDesk;
use std::fmt::Write;

/// 注册列表中一条记录的只读展示视图
#[derive(Debug, Clone, Copy)]
pub struct DisplayEntry<'a> {
    record: &'a UserRecord,
}

impl<'a> DisplayEntry<'a> {
    pub fn new(record: &'a UserRecord) -> Self {
        Self { record }
    }

    pub fn id(&self) -> &'a str {
        self.record.id()
    }

    pub fn heading(&self) -> String {
        format!("User ID: {}", self.record.id())
    }

    /// (标签, 值) 行，顺序与表单一致
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        let record = self.record;
        Field::ALL
            .into_iter()
            .map(move |field| (field.label(), record.get(field)))
    }
}

/// 页面顶部的提示横幅
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    Accepted(&'a str),
    Rejected(&'a str),
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 渲染完整的注册页面
pub fn page(desk: &RegistrationDesk, notice: Option<Notice<'_>>) -> String {
    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>User Registration</title>
</head>
<body>
    <h1>User Registration</h1>
"#,
    );

    match notice {
        Some(Notice::Rejected(message)) => {
            let _ = writeln!(
                html,
                r#"    <div class="notice error" role="alert">{}</div>"#,
                escape_html(message)
            );
        }
        Some(Notice::Accepted(id)) => {
            let _ = writeln!(
                html,
                r#"    <div class="notice success">Registered {}</div>"#,
                escape_html(id)
            );
        }
        None => {}
    }

    render_form(&mut html, desk);

    html.push_str("    <div class=\"users\">\n");
    for entry in desk.entries() {
        render_entry(&mut html, &entry);
    }
    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, desk: &RegistrationDesk) {
    let draft = desk.draft();
    html.push_str("    <form method=\"post\" action=\"/\">\n");

    let _ = writeln!(
        html,
        r#"        <label>Full Name <input type="text" name="fullName" value="{}" required></label>"#,
        escape_html(&draft.full_name)
    );
    let _ = writeln!(
        html,
        r#"        <label>Email Address <input type="email" name="email" value="{}" required></label>"#,
        escape_html(&draft.email)
    );
    let _ = writeln!(
        html,
        r#"        <label>Age <input type="number" name="age" value="{}" required></label>"#,
        escape_html(&draft.age)
    );

    html.push_str("        <label>Gender <select name=\"gender\" required>\n");
    let _ = writeln!(
        html,
        r#"            <option value=""{}>Select Gender</option>"#,
        selected(draft.gender.is_empty())
    );
    for gender in Gender::OPTIONS {
        let _ = writeln!(
            html,
            r#"            <option value="{0}"{1}>{0}</option>"#,
            gender.as_str(),
            selected(draft.gender == gender.as_str())
        );
    }
    html.push_str("        </select></label>\n");

    let _ = writeln!(
        html,
        r#"        <label>Address <textarea name="address" rows="3" required>{}</textarea></label>"#,
        escape_html(&draft.address)
    );
    html.push_str("        <button type=\"submit\">Submit</button>\n    </form>\n");
}

fn render_entry(html: &mut String, entry: &DisplayEntry<'_>) {
    let _ = writeln!(
        html,
        "        <div class=\"user\" id=\"{}\">\n            <h2>{}</h2>",
        escape_html(entry.id()),
        escape_html(&entry.heading())
    );
    for (label, value) in entry.rows() {
        let _ = writeln!(
            html,
            "            <p><strong>{}:</strong> {}</p>",
            label,
            escape_html(value)
        );
    }
    html.push_str("        </div>\n");
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}
