//! 布局计算
//!
//! 分组高度与滚动窗口，均为纯函数

use std::ops::Range;

use crate::form::Form;
use crate::models::{FieldDescriptor, FieldType};

/// 多行输入默认行数
pub const DEFAULT_TEXTAREA_ROWS: u16 = 3;

/// 一个待渲染的字段分组
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup<'a> {
    /// 字段在 schema 中的下标
    pub index: usize,
    pub field: &'a FieldDescriptor,
    pub height: u16,
}

/// 按 schema 顺序生成分组，跳过无法识别的类型
pub fn field_groups(form: &Form) -> Vec<FieldGroup<'_>> {
    form.schema()
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, field)| field.field_type.is_supported())
        .map(|(index, field)| FieldGroup {
            index,
            field,
            height: group_height(field, form.errors().contains(&field.name)),
        })
        .collect()
}

/// 控件本身占用的行数
pub fn control_height(field: &FieldDescriptor) -> u16 {
    match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Password | FieldType::Tel => 3,
        FieldType::Textarea => field.rows.unwrap_or(DEFAULT_TEXTAREA_ROWS).max(1) + 2,
        FieldType::Radiogroup | FieldType::Checkboxgroup => {
            u16::try_from(field.options.len().max(1)).unwrap_or(u16::MAX)
        }
        FieldType::Selectlist => 3,
        FieldType::Unsupported => 0,
    }
}

/// 标签 + 控件 + 帮助文本 + 错误提示
pub fn group_height(field: &FieldDescriptor, has_error: bool) -> u16 {
    let helper = u16::from(field.helper_text.is_some());
    let error = u16::from(has_error);
    (1 + control_height(field)).saturating_add(helper + error)
}

/// 计算可见分组范围，保证聚焦分组完整可见
///
/// `focused` 为 None 时（焦点在按钮上）以最后一个分组为锚点。
pub fn visible_range(heights: &[u16], focused: Option<usize>, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let anchor = focused.unwrap_or(heights.len() - 1).min(heights.len() - 1);
    let available = u32::from(available);

    let mut start = 0;
    let mut used: u32 = heights[..=anchor].iter().map(|&h| u32::from(h)).sum();
    while used > available && start < anchor {
        used -= u32::from(heights[start]);
        start += 1;
    }

    let mut end = anchor + 1;
    while end < heights.len() && used + u32::from(heights[end]) <= available {
        used += u32::from(heights[end]);
        end += 1;
    }
    start..end
}
