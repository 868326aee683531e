//! 表单状态定义 (Model)
//!
//! 包含 Form 组件的状态、控件列表及提交状态机

use std::fmt;

use tracing::warn;

use crate::models::{Errors, FieldDescriptor, FieldType, FormProps, Schema, Values};

/// 校验回调：值表 -> 错误表
pub type ValidationHandler = Box<dyn FnMut(&Values) -> Errors>;
/// 成功回调
pub type SuccessHandler = Box<dyn FnMut(&Values)>;

/// 提交状态: Idle -> Validating -> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
}

/// 最近一次提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { errors: usize },
}

/// 控件种类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Input,
    TextArea,
    Radio { option: usize },
    Checkbox { option: usize },
    Select,
    SubmitButton,
    ResetButton,
}

/// 可聚焦的控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    /// 所属字段在 schema 中的下标，按钮为 None
    pub field: Option<usize>,
    pub kind: ControlKind,
}

/// 表单组件
pub struct Form {
    pub props: FormProps,
    pub(super) schema: Schema,
    pub(super) initial_values: Values,
    pub(super) values: Values,
    pub(super) errors: Errors,
    pub(super) submit_state: SubmitState,
    pub(super) submit_count: u32,
    pub(super) last_outcome: Option<SubmitOutcome>,
    pub(super) validation_handler: Option<ValidationHandler>,
    pub(super) success_handler: SuccessHandler,
    pub(super) controls: Vec<Control>,
    pub(super) focus: usize,
    pub message: Option<String>,
}

impl Form {
    /// 创建表单实例，值表由初始值复制而来
    pub fn new(props: FormProps, schema: Schema, initial_values: Values) -> Self {
        let controls = build_controls(&props, &schema);
        Self {
            props,
            schema,
            values: initial_values.clone(),
            initial_values,
            errors: Errors::new(),
            submit_state: SubmitState::Idle,
            submit_count: 0,
            last_outcome: None,
            validation_handler: None,
            success_handler: Box::new(|_| {}),
            controls,
            focus: 0,
            message: None,
        }
    }

    pub fn on_validate(mut self, handler: impl FnMut(&Values) -> Errors + 'static) -> Self {
        self.validation_handler = Some(Box::new(handler));
        self
    }

    pub fn on_success(mut self, handler: impl FnMut(&Values) + 'static) -> Self {
        self.success_handler = Box::new(handler);
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn initial_values(&self) -> &Values {
        &self.initial_values
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// 获取当前聚焦的控件
    pub fn focused_control(&self) -> Option<&Control> {
        self.controls.get(self.focus)
    }

    /// 获取控件所属字段
    pub fn field_of(&self, control: &Control) -> Option<&FieldDescriptor> {
        control.field.and_then(|i| self.schema.fields().get(i))
    }

    /// 当前聚焦控件所属字段的下标
    pub fn focused_field(&self) -> Option<usize> {
        self.focused_control().and_then(|c| c.field)
    }

    /// 按 id 查找控件
    pub fn control_by_id(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// 按 id 设置焦点，找不到时返回 false
    pub fn focus_control(&mut self, id: &str) -> bool {
        match self.controls.iter().position(|c| c.id == id) {
            Some(index) => {
                self.focus = index;
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("props", &self.props)
            .field("fields", &self.schema.len())
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("submit_state", &self.submit_state)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

/// 控件 id: `{表单名}__{后缀}`
pub fn control_id(form_name: &str, suffix: &str) -> String {
    format!("{form_name}__{suffix}")
}

/// 按 schema 顺序展开控件列表，末尾追加按钮
fn build_controls(props: &FormProps, schema: &Schema) -> Vec<Control> {
    let form = props.name.as_str();
    let mut controls = Vec::new();

    for (index, field) in schema.fields().iter().enumerate() {
        let field_control = |kind: ControlKind, id: String| Control {
            id,
            field: Some(index),
            kind,
        };
        match field.field_type {
            FieldType::Text | FieldType::Email | FieldType::Password | FieldType::Tel => {
                controls.push(field_control(ControlKind::Input, control_id(form, &field.name)));
            }
            FieldType::Textarea => {
                controls.push(field_control(ControlKind::TextArea, control_id(form, &field.name)));
            }
            FieldType::Radiogroup => {
                let id = control_id(form, &format!("radio-{}", field.name));
                controls.extend(
                    (0..field.options.len())
                        .map(|option| field_control(ControlKind::Radio { option }, id.clone())),
                );
            }
            FieldType::Checkboxgroup => {
                controls.extend(field.options.iter().enumerate().map(|(option, opt)| {
                    field_control(ControlKind::Checkbox { option }, control_id(form, opt.key()))
                }));
            }
            FieldType::Selectlist => {
                controls.push(field_control(ControlKind::Select, control_id(form, &field.name)));
            }
            FieldType::Unsupported => {
                warn!(form, field = %field.name, "unsupported field type, field not rendered");
            }
        }
    }

    controls.push(Control {
        id: control_id(form, "submit"),
        field: None,
        kind: ControlKind::SubmitButton,
    });
    if props.show_reset_button {
        controls.push(Control {
            id: control_id(form, "reset"),
            field: None,
            kind: ControlKind::ResetButton,
        });
    }
    controls
}
