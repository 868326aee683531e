//! 表单组件
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): Form 结构体及其状态数据
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs, input.rs): 按键转化为 Action，再转化为 ChangeEvent

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use actions::{Action, ChangeEvent};
pub use input::{get_action, handle_key_event};
pub use state::{Control, ControlKind, Form, SubmitOutcome, SubmitState, control_id};
pub use view::render;
