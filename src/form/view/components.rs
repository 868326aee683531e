//! 通用 UI 组件
//!
//! 输入框、选项列表、下拉框、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// 选项列表样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStyle {
    Radio,
    Checkbox,
}

impl ChoiceStyle {
    fn marker(self, marked: bool) -> &'static str {
        match (self, marked) {
            (ChoiceStyle::Radio, true) => "(•) ",
            (ChoiceStyle::Radio, false) => "( ) ",
            (ChoiceStyle::Checkbox, true) => "[x] ",
            (ChoiceStyle::Checkbox, false) => "[ ] ",
        }
    }
}

/// 选项列表中的一项
#[derive(Debug, Clone)]
pub struct ChoiceItem<'a> {
    pub label: &'a str,
    pub marked: bool,
    pub focused: bool,
}

/// [组件] 分组标签: 标签 + 附加说明
pub fn render_group_label(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    label_info: Option<&str>,
    is_focused: bool,
) {
    let label_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut spans = vec![Span::styled(label.to_string(), label_style)];
    if let Some(info) = label_info.filter(|s| !s.is_empty()) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(info.to_string(), Style::default().fg(Color::Gray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// [组件] 带有标题和样式的输入框
///
/// 值为空时显示占位文本；内容超出边框时滚动到末尾；聚焦时返回光标位置
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: Option<&str>,
    is_focused: bool,
    active_color: Color,
) -> Option<Position> {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    // 末尾所在的行列
    let last_line = value.rsplit('\n').next().unwrap_or_default();
    let row = u16::try_from(value.matches('\n').count()).unwrap_or(u16::MAX);
    let col = u16::try_from(Line::from(last_line).width()).unwrap_or(u16::MAX);
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let scroll = (
        row.saturating_sub(inner_height.saturating_sub(1)),
        col.saturating_sub(inner_width.saturating_sub(1)),
    );

    let paragraph = match placeholder {
        Some(hint) if value.is_empty() => {
            Paragraph::new(hint.to_string()).style(Style::default().fg(Color::DarkGray))
        }
        _ => Paragraph::new(value.to_string()).style(style).scroll(scroll),
    };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(style);
    frame.render_widget(paragraph.block(block), area);

    if !is_focused || inner_width == 0 || inner_height == 0 {
        return None;
    }
    Some(Position::new(
        area.x + 1 + (col - scroll.1).min(inner_width - 1),
        area.y + 1 + (row - scroll.0).min(inner_height - 1),
    ))
}

/// [组件] 单选/复选列表，每项一行
pub fn render_choice_list(frame: &mut Frame, area: Rect, items: &[ChoiceItem<'_>], style: ChoiceStyle) {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            let item_style = if item.focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if item.marked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{}{}", style.marker(item.marked), item.label),
                item_style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// [组件] 下拉框，显示当前选中项
pub fn render_select_widget(frame: &mut Frame, area: Rect, selected: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let select = Paragraph::new(format!("‹ {selected} ›"))
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(select, area);
}

/// [组件] 单行提示（帮助文本、错误信息）
pub fn render_note(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    frame.render_widget(
        Paragraph::new(text.to_string()).style(Style::default().fg(color)),
        area,
    );
}

/// [组件] 按钮
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    is_focused: bool,
    disabled: bool,
    primary: bool,
) {
    let base = if primary {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        base
    };
    let button = Paragraph::new(title.to_string())
        .style(style)
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// 按钮宽度：标题 + 边框 + 留白
pub fn button_width(title: &str) -> u16 {
    u16::try_from(Line::from(title).width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}
