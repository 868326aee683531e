//! 视图层模块
//!
//! 包含主渲染入口和各字段分组的渲染

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{ControlKind, Form};
use crate::models::{FieldDescriptor, FieldType};
use components::{
    ChoiceItem, ChoiceStyle, button_width, render_button, render_choice_list, render_group_label,
    render_input_widget, render_note, render_select_widget,
};
use layouts::{FieldGroup, control_height, field_groups, visible_range};

/// 渲染 UI
pub fn render(frame: &mut Frame, form: &Form) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(4),    // 字段
            Constraint::Length(3), // 按钮
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, form, chunks[0]);
    render_fields(frame, form, chunks[1]);
    render_buttons(frame, form, chunks[2]);
    render_help(frame, form, chunks[3]);
}

fn render_title(frame: &mut Frame, form: &Form, area: Rect) {
    let name = if form.props.name.is_empty() {
        "表单"
    } else {
        form.props.name.as_str()
    };
    let text = if form.submit_count() == 0 {
        format!("📝 {name}")
    } else {
        format!("📝 {name}  (已提交 {} 次)", form.submit_count())
    };
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_fields(frame: &mut Frame, form: &Form, area: Rect) {
    let groups = field_groups(form);
    let heights: Vec<u16> = groups.iter().map(|g| g.height).collect();
    let focused = form
        .focused_field()
        .and_then(|index| groups.iter().position(|g| g.index == index));
    let range = visible_range(&heights, focused, area.height);

    let visible = &groups[range];
    let mut constraints: Vec<Constraint> =
        visible.iter().map(|g| Constraint::Length(g.height)).collect();
    constraints.push(Constraint::Min(0));
    let rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (group, rect) in visible.iter().zip(rects.iter()) {
        render_group(frame, form, group, *rect);
    }
}

/// 渲染一个字段分组：标签、控件、帮助文本、错误提示
fn render_group(frame: &mut Frame, form: &Form, group: &FieldGroup<'_>, area: Rect) {
    let field = group.field;
    let error = form.errors().get(&field.name);
    let is_focused = form.focused_field() == Some(group.index);

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(control_height(field)),
    ];
    if field.helper_text.is_some() {
        constraints.push(Constraint::Length(1));
    }
    if error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_group_label(
        frame,
        rows[0],
        &field.label,
        field.label_info.as_deref(),
        is_focused,
    );
    render_control(frame, form, group.index, field, rows[1]);

    let mut next = 2;
    if let Some(helper) = field.helper_text.as_deref() {
        render_note(frame, rows[next], helper, Color::Gray);
        next += 1;
    }
    if let Some(message) = error {
        render_note(frame, rows[next], message, Color::Red);
    }
}

fn render_control(frame: &mut Frame, form: &Form, index: usize, field: &FieldDescriptor, area: Rect) {
    let focused_kind = form
        .focused_control()
        .filter(|c| c.field == Some(index))
        .map(|c| &c.kind);
    let values = form.values();

    match field.field_type {
        FieldType::Text | FieldType::Email | FieldType::Password | FieldType::Tel => {
            let value = values.text(&field.name);
            let shown = if field.field_type == FieldType::Password {
                "•".repeat(value.chars().count())
            } else {
                value.to_string()
            };
            let cursor = render_input_widget(
                frame,
                area,
                &length_hint(field, value),
                &shown,
                field.placeholder.as_deref(),
                focused_kind.is_some(),
                Color::Yellow,
            );
            if let Some(position) = cursor {
                frame.set_cursor_position(position);
            }
        }
        FieldType::Textarea => {
            let width = field
                .cols
                .map_or(area.width, |cols| cols.saturating_add(2).min(area.width));
            let area = Rect { width, ..area };
            let value = values.text(&field.name);
            let cursor = render_input_widget(
                frame,
                area,
                &length_hint(field, value),
                value,
                field.placeholder.as_deref(),
                focused_kind.is_some(),
                Color::Yellow,
            );
            if let Some(position) = cursor {
                frame.set_cursor_position(position);
            }
        }
        FieldType::Radiogroup => {
            let selected = values.text(&field.name);
            let items: Vec<ChoiceItem<'_>> = field
                .options
                .iter()
                .enumerate()
                .map(|(option, opt)| ChoiceItem {
                    label: &opt.label,
                    marked: values.get(&field.name).is_some() && opt.value_str() == selected,
                    focused: focused_kind == Some(&ControlKind::Radio { option }),
                })
                .collect();
            render_choice_list(frame, area, &items, ChoiceStyle::Radio);
        }
        FieldType::Checkboxgroup => {
            let items: Vec<ChoiceItem<'_>> = field
                .options
                .iter()
                .enumerate()
                .map(|(option, opt)| ChoiceItem {
                    label: &opt.label,
                    marked: values.flag(opt.key()),
                    focused: focused_kind == Some(&ControlKind::Checkbox { option }),
                })
                .collect();
            render_choice_list(frame, area, &items, ChoiceStyle::Checkbox);
        }
        FieldType::Selectlist => {
            let current = values.text(&field.name);
            let selected = field
                .options
                .iter()
                .find(|o| o.value_str() == current)
                .or_else(|| field.options.first())
                .map(|o| o.label.as_str())
                .unwrap_or_default();
            render_select_widget(frame, area, selected, focused_kind.is_some());
        }
        FieldType::Unsupported => {}
    }
}

/// 输入框标题：已输入字符数与长度限制
fn length_hint(field: &FieldDescriptor, value: &str) -> String {
    let count = value.chars().count();
    match (field.min_length, field.max_length) {
        (Some(min), Some(max)) => format!("{count}/{max} (至少 {min})"),
        (None, Some(max)) => format!("{count}/{max}"),
        (Some(min), None) => format!("{count} (至少 {min})"),
        (None, None) => String::new(),
    }
}

fn render_buttons(frame: &mut Frame, form: &Form, area: Rect) {
    let props = &form.props;
    let focused_kind = form.focused_control().map(|c| &c.kind);
    let reset_title = "RESET";

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width(&props.ok_button_title)),
            Constraint::Length(1),
            Constraint::Length(button_width(reset_title)),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        &props.ok_button_title,
        focused_kind == Some(&ControlKind::SubmitButton),
        props.disable_buttons,
        true,
    );
    if props.show_reset_button {
        render_button(
            frame,
            chunks[2],
            reset_title,
            focused_kind == Some(&ControlKind::ResetButton),
            props.disable_buttons,
            false,
        );
    }
}

fn render_help(frame: &mut Frame, form: &Form, area: Rect) {
    let help_text = match form.focused_control().map(|c| &c.kind) {
        Some(ControlKind::Input) => "输入文字  [Tab/↓] 下一项  [Ctrl+S] 提交  [Esc] 退出",
        Some(ControlKind::TextArea) => "输入文字  [Enter] 换行  [Tab] 下一项  [Ctrl+S] 提交",
        Some(ControlKind::Radio { .. }) => "[Space] 选择  [Tab/↓] 下一项  [Ctrl+S] 提交",
        Some(ControlKind::Checkbox { .. }) => "[Space] 勾选/取消  [Tab/↓] 下一项  [Ctrl+S] 提交",
        Some(ControlKind::Select) => "[←/→] 切换选项  [Tab/↓] 下一项  [Ctrl+S] 提交",
        Some(ControlKind::SubmitButton) => "[Enter] 提交  [Tab] 下一项  [Esc] 退出",
        Some(ControlKind::ResetButton) => "[Enter] 重置  [Tab] 下一项  [Esc] 退出",
        None => "[Esc] 退出",
    };

    let message = form.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
