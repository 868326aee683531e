use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Tel,
    Textarea,
    Radiogroup,
    Checkboxgroup,
    Selectlist,
    /// 无法识别的类型，不渲染任何控件
    #[serde(other)]
    Unsupported,
}

impl FieldType {
    pub fn is_supported(self) -> bool {
        self != FieldType::Unsupported
    }
}

/// 选项
///
/// 单选组与下拉框使用 `{label, value}`，复选组使用 `{name, label}`，
/// 其中 `name` 是该复选框在值表中的键。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FieldOption {
    pub fn value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            name: Some(name.into()),
        }
    }

    /// 选中后写入值表的字符串
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// 复选框在值表中的键
    pub fn key(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// 字段描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default, alias = "placeHolder")]
    pub placeholder: Option<String>,
    #[serde(default, alias = "minLength")]
    pub min_length: Option<usize>,
    #[serde(default, alias = "maxLength")]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub rows: Option<u16>,
    #[serde(default)]
    pub cols: Option<u16>,
    #[serde(default, alias = "labelInfo")]
    pub label_info: Option<String>,
    #[serde(default, alias = "helperText")]
    pub helper_text: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            field_type,
            options: Vec::new(),
            placeholder: None,
            min_length: None,
            max_length: None,
            rows: None,
            cols: None,
            label_info: None,
            helper_text: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label_info(mut self, info: impl Into<String>) -> Self {
        self.label_info = Some(info.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn size(mut self, rows: u16, cols: u16) -> Self {
        self.rows = Some(rows);
        self.cols = Some(cols);
        self
    }

    pub fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }
}

/// 表单结构：有序的字段描述列表，顺序即渲染顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Vec<FieldDescriptor>);

impl Schema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 可渲染的字段（类型可识别）
    pub fn supported(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.0.iter().filter(|f| f.field_type.is_supported())
    }
}

impl From<Vec<FieldDescriptor>> for Schema {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self(fields)
    }
}

/// 字段值：复选框为布尔，其余为字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }

    /// 非空字符串或 true
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// 值表：字段名 -> 当前值，未设置即不存在
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(BTreeMap<String, FieldValue>);

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// 字符串值，未设置或为布尔时返回空串
    pub fn text(&self, name: &str) -> &str {
        self.0.get(name).and_then(FieldValue::as_str).unwrap_or_default()
    }

    /// 布尔值，未设置或为字符串时返回 false
    pub fn flag(&self, name: &str) -> bool {
        self.0.get(name).and_then(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn is_filled(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(FieldValue::is_filled)
    }

    /// 合并单个字段，返回旧值
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// 错误表：字段名 -> 校验提示
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors(BTreeMap<String, String>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.0.insert(name.into(), message.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Errors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// 表单属性
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormProps {
    /// 表单 id，同时作为控件 id 的命名前缀
    pub name: String,
    pub ok_button_title: String,
    pub show_reset_button: bool,
    pub disable_buttons: bool,
}

impl Default for FormProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            ok_button_title: "SEND".to_string(),
            show_reset_button: false,
            disable_buttons: false,
        }
    }
}

impl FormProps {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// TOML 表单文档
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default)]
    pub form: FormProps,
    pub fields: Schema,
    #[serde(default)]
    pub initial_values: Values,
}

/// 提交回执
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub form: String,
    pub submitted_at: DateTime<Local>,
    pub values: Values,
}

impl Submission {
    pub fn new(form: impl Into<String>, values: Values) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            form: form.into(),
            submitted_at: Local::now(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_parses_fields_and_values() {
        let doc: FormDocument = toml::from_str(
            r#"
            [form]
            name = "frm"
            show_reset_button = true

            [[fields]]
            name = "first_name"
            label = "First Name"
            type = "text"
            placeHolder = "John"
            maxLength = 20

            [[fields]]
            name = "moc"
            type = "checkboxgroup"
            options = [{ name = "moc_email", label = "Via Email" }]

            [[fields]]
            name = "dob"
            type = "date"

            [initial_values]
            first_name = ""
            moc_email = false
            "#,
        )
        .unwrap();

        assert_eq!(doc.form.name, "frm");
        assert_eq!(doc.form.ok_button_title, "SEND");
        assert!(doc.form.show_reset_button);
        assert_eq!(doc.fields.len(), 3);
        assert_eq!(doc.fields.fields()[0].placeholder.as_deref(), Some("John"));
        assert_eq!(doc.fields.fields()[0].max_length, Some(20));
        assert_eq!(doc.fields.fields()[1].options[0].key(), "moc_email");
        assert_eq!(doc.fields.fields()[2].field_type, FieldType::Unsupported);
        assert_eq!(doc.fields.supported().count(), 2);
        assert_eq!(doc.initial_values.get("moc_email"), Some(&FieldValue::Bool(false)));
        assert_eq!(doc.initial_values.text("first_name"), "");
    }

    #[test]
    fn test_values_accessors() {
        let values: Values = [
            ("a", FieldValue::from("x")),
            ("b", FieldValue::from(true)),
            ("c", FieldValue::from("")),
        ]
        .into_iter()
        .collect();

        assert_eq!(values.text("a"), "x");
        assert_eq!(values.text("b"), "");
        assert!(values.flag("b"));
        assert!(!values.flag("a"));
        assert!(values.is_filled("a"));
        assert!(!values.is_filled("c"));
        assert!(!values.is_filled("missing"));
    }

    #[test]
    fn test_submission_serializes_values_plainly() {
        let values: Values = [("a", FieldValue::from("x")), ("b", FieldValue::from(false))]
            .into_iter()
            .collect();
        let submission = Submission::new("frm", values);
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(json["form"], "frm");
        assert_eq!(json["values"]["a"], "x");
        assert_eq!(json["values"]["b"], false);
        assert_eq!(submission.id.len(), 36);
    }
}
