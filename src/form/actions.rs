//! Action 与 ChangeEvent 定义 (Intent)
//!
//! 按键先转化为 Action，Action 再转化为对值表的 ChangeEvent

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 文本输入
    Input(char),
    DeleteChar,
    NewLine,

    // 单选/复选/按钮
    Activate,
    // 下拉框
    SelectNext,
    SelectPrev,

    // 表单级
    Submit, // Ctrl+S 或提交按钮
    Reset,  // Ctrl+R 或重置按钮
}

/// 控件变更事件
///
/// 复选框提交布尔值，其余控件提交字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Value { name: String, value: String },
    Checked { name: String, checked: bool },
}

impl ChangeEvent {
    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        ChangeEvent::Value {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn checked(name: impl Into<String>, checked: bool) -> Self {
        ChangeEvent::Checked {
            name: name.into(),
            checked,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ChangeEvent::Value { name, .. } | ChangeEvent::Checked { name, .. } => name,
        }
    }
}
