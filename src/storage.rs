use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{FormDocument, Submission};

/// 从 TOML 文件加载表单文档
pub fn load_document(path: &Path) -> Result<FormDocument> {
    let content = fs::read_to_string(path)?;
    let document: FormDocument = toml::from_str(&content)?;
    debug!(
        path = %path.display(),
        fields = document.fields.len(),
        "loaded form document"
    );
    Ok(document)
}

/// 提交回执编码为 JSON
pub fn encode_submission(submission: &Submission) -> Result<String> {
    Ok(serde_json::to_string_pretty(submission)?)
}

/// 保存提交回执到 JSON 文件
pub fn save_submission(submission: &Submission, path: &Path) -> Result<()> {
    let content = encode_submission(submission)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    info!(path = %path.display(), id = %submission.id, "submission saved");
    Ok(())
}
