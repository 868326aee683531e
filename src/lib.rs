//! # xform
//!
//! 由 schema 驱动的终端表单组件。
//!
//! 给定字段描述列表与初始值，[`Form`] 渲染对应的输入控件，收集编辑，
//! 提交时调用校验回调，错误表为空时调用成功回调。
//!
//! ```rust,ignore
//! use xform::{Errors, FieldDescriptor, FieldType, Form, FormProps, Schema, Values};
//!
//! let schema = Schema::new(vec![FieldDescriptor::new("a", FieldType::Text).label("A")]);
//! let initial: Values = [("a", "")].into_iter().collect();
//!
//! let mut form = Form::new(FormProps::named("frm"), schema, initial)
//!     .on_validate(|v| {
//!         if v.is_filled("a") {
//!             Errors::new()
//!         } else {
//!             [("a", "required")].into_iter().collect()
//!         }
//!     })
//!     .on_success(|v| println!("{v:?}"));
//!
//! terminal.draw(|f| xform::render(f, &form))?;
//! ```

pub mod demo;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{Error, Result};
pub use form::{Action, ChangeEvent, Control, ControlKind, Form, SubmitOutcome, SubmitState, render};
pub use models::{
    Errors, FieldDescriptor, FieldOption, FieldType, FieldValue, FormDocument, FormProps, Schema,
    Submission, Values,
};
