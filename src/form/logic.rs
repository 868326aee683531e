//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含 dispatch 分发以及变更、提交、重置三种核心处理

use tracing::{debug, info};

use super::actions::{Action, ChangeEvent};
use super::state::{ControlKind, Form, SubmitOutcome, SubmitState};
use crate::models::FieldValue;

impl Form {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),

            Action::Input(c) => self.type_char(c),
            Action::NewLine => {
                if matches!(self.focused_kind(), Some(ControlKind::TextArea)) {
                    self.type_char('\n');
                }
            }
            Action::DeleteChar => self.delete_char(),

            Action::Activate => self.activate(),
            Action::SelectNext => self.cycle_select(true),
            Action::SelectPrev => self.cycle_select(false),

            Action::Submit => self.press_submit(),
            Action::Reset => self.press_reset(),
        }
        false
    }

    // ============ 三种核心处理 ============

    /// 将变更合并进值表，其余字段保持不变
    pub fn handle_change(&mut self, event: ChangeEvent) {
        debug!(form = %self.props.name, field = event.name(), "field changed");
        match event {
            ChangeEvent::Value { name, value } => {
                self.values.insert(name, FieldValue::Text(value));
            }
            ChangeEvent::Checked { name, checked } => {
                self.values.insert(name, FieldValue::Bool(checked));
            }
        }
    }

    /// 校验并在无错误时调用成功回调
    ///
    /// 没有校验回调时保留上一次的错误表。
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        self.submit_state = SubmitState::Validating;
        if let Some(validate) = self.validation_handler.as_mut() {
            self.errors = validate(&self.values);
        }
        self.submit_state = SubmitState::Idle;
        self.submit_count += 1;

        let outcome = if self.errors.is_empty() {
            (self.success_handler)(&self.values);
            self.message = Some("提交成功".to_string());
            SubmitOutcome::Accepted
        } else {
            self.message = Some(format!("校验未通过：{} 个错误", self.errors.len()));
            SubmitOutcome::Rejected {
                errors: self.errors.len(),
            }
        };
        info!(
            form = %self.props.name,
            submit = self.submit_count,
            errors = self.errors.len(),
            "form submitted"
        );
        self.last_outcome = Some(outcome);
        outcome
    }

    /// 值表恢复为初始值的副本，错误表与提交状态不变
    pub fn handle_reset(&mut self) {
        self.values = self.initial_values.clone();
        self.message = Some("已重置".to_string());
        info!(form = %self.props.name, "form reset");
    }

    // ============ 导航相关 ============

    /// 焦点移到下一个控件（循环）
    pub fn focus_next(&mut self) {
        if !self.controls.is_empty() {
            self.focus = (self.focus + 1) % self.controls.len();
        }
    }

    /// 焦点移到上一个控件（循环）
    pub fn focus_prev(&mut self) {
        if !self.controls.is_empty() {
            self.focus = (self.focus + self.controls.len() - 1) % self.controls.len();
        }
    }

    fn focused_kind(&self) -> Option<&ControlKind> {
        self.focused_control().map(|c| &c.kind)
    }

    // ============ 文本输入相关 ============

    fn type_char(&mut self, c: char) {
        let Some(control) = self.focused_control() else {
            return;
        };
        if !matches!(control.kind, ControlKind::Input | ControlKind::TextArea) {
            return;
        }
        let Some(field) = self.field_of(control) else {
            return;
        };

        let current = self.values.text(&field.name);
        if let Some(max) = field.max_length {
            if current.chars().count() >= max {
                self.message = Some(format!("最多 {max} 个字符"));
                return;
            }
        }

        let event = ChangeEvent::value(field.name.clone(), format!("{current}{c}"));
        self.handle_change(event);
    }

    fn delete_char(&mut self) {
        let Some(control) = self.focused_control() else {
            return;
        };
        if !matches!(control.kind, ControlKind::Input | ControlKind::TextArea) {
            return;
        }
        let Some(field) = self.field_of(control) else {
            return;
        };

        let mut value = self.values.text(&field.name).to_string();
        if value.pop().is_some() {
            let event = ChangeEvent::value(field.name.clone(), value);
            self.handle_change(event);
        }
    }

    // ============ 选择控件相关 ============

    fn activate(&mut self) {
        let Some(control) = self.focused_control() else {
            return;
        };
        let event = match control.kind {
            ControlKind::Radio { option } => self
                .field_of(control)
                .and_then(|f| f.options.get(option).map(|o| (f, o)))
                .map(|(f, o)| ChangeEvent::value(f.name.clone(), o.value_str())),
            ControlKind::Checkbox { option } => self
                .field_of(control)
                .and_then(|f| f.options.get(option))
                .map(|o| ChangeEvent::checked(o.key(), !self.values.flag(o.key()))),
            ControlKind::SubmitButton => {
                self.press_submit();
                return;
            }
            ControlKind::ResetButton => {
                self.press_reset();
                return;
            }
            ControlKind::Input | ControlKind::TextArea | ControlKind::Select => None,
        };
        if let Some(event) = event {
            self.handle_change(event);
        }
    }

    fn cycle_select(&mut self, forward: bool) {
        let Some(control) = self.focused_control() else {
            return;
        };
        if control.kind != ControlKind::Select {
            return;
        }
        let Some(field) = self.field_of(control) else {
            return;
        };
        let count = field.options.len();
        if count == 0 {
            return;
        }

        let current = self.values.text(&field.name);
        let next = match field.options.iter().position(|o| o.value_str() == current) {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None if forward => 0,
            None => count - 1,
        };
        let event = ChangeEvent::value(field.name.clone(), field.options[next].value_str());
        self.handle_change(event);
    }

    // ============ 按钮相关 ============

    /// 提交按钮，按钮禁用时忽略
    pub fn press_submit(&mut self) {
        if self.props.disable_buttons {
            self.message = Some("按钮已禁用".to_string());
            return;
        }
        self.handle_submit();
    }

    /// 重置按钮，按钮隐藏或禁用时忽略
    pub fn press_reset(&mut self) {
        if !self.props.show_reset_button {
            return;
        }
        if self.props.disable_buttons {
            self.message = Some("按钮已禁用".to_string());
            return;
        }
        self.handle_reset();
    }
}
