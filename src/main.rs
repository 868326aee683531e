use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use xform::form::handle_key_event;
use xform::storage::{encode_submission, load_document, save_submission};
use xform::{Form, FormDocument, FormProps, Submission, demo, logging, render};

/// 在终端中运行由 schema 描述的表单
#[derive(Debug, Parser)]
#[command(name = "xform", version, about)]
struct Cli {
    /// 表单文档 (TOML)，缺省时运行内置问卷示例
    #[arg(long)]
    schema: Option<PathBuf>,

    /// 表单名，同时作为控件 id 前缀
    #[arg(long)]
    name: Option<String>,

    /// 提交按钮标题
    #[arg(long = "ok-title")]
    ok_title: Option<String>,

    /// 显示重置按钮
    #[arg(long)]
    show_reset: bool,

    /// 禁用提交与重置按钮
    #[arg(long)]
    disable_buttons: bool,

    /// 提交回执写入该文件，而非 stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// 日志文件 (~/.local/share/xform/xform.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// 命令行参数覆盖文档中的 [form] 配置
    fn apply(&self, props: &mut FormProps) {
        if let Some(name) = &self.name {
            props.name = name.clone();
        }
        if let Some(title) = &self.ok_title {
            props.ok_button_title = title.clone();
        }
        props.show_reset_button |= self.show_reset;
        props.disable_buttons |= self.disable_buttons;
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .context("无法获取用户数据目录")?;
    logging::init(&log_path).context("初始化日志失败")?;

    let with_validation = cli.schema.is_none();
    let mut document = match &cli.schema {
        Some(path) => load_document(path)
            .with_context(|| format!("加载表单文档失败: {}", path.display()))?,
        None => FormDocument {
            form: demo::survey_props(),
            fields: demo::survey_schema(),
            initial_values: demo::survey_initial_values(),
        },
    };
    cli.apply(&mut document.form);
    info!(form = %document.form.name, fields = document.fields.len(), "starting form");

    // 成功回调写入回执，主循环据此退出
    let receipt: Rc<RefCell<Option<Submission>>> = Rc::new(RefCell::new(None));
    let slot = receipt.clone();
    let form_name = document.form.name.clone();
    let mut form = Form::new(document.form, document.fields, document.initial_values)
        .on_success(move |values| {
            *slot.borrow_mut() = Some(Submission::new(form_name.clone(), values.clone()));
        });
    if with_validation {
        form = form.on_validate(demo::survey_validation);
    }

    // 校验回调 panic 时也要恢复终端
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut form, &receipt);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    match receipt.borrow_mut().take() {
        Some(submission) => match &cli.output {
            Some(path) => {
                save_submission(&submission, path)
                    .with_context(|| format!("保存回执失败: {}", path.display()))?;
                println!("回执已保存到 {}", path.display());
            }
            None => println!("{}", encode_submission(&submission)?),
        },
        None => info!("form closed without submission"),
    }
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    form: &mut Form,
    receipt: &RefCell<Option<Submission>>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, form))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && handle_key_event(form, key) {
                break;
            }
        }
        if receipt.borrow().is_some() {
            break;
        }
    }
    Ok(())
}
