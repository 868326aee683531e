//! 错误类型
//!
//! 字段校验提示属于数据（见 [`crate::models::Errors`]），这里只描述运行时故障。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid form document: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to encode submission: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "io error: gone");
    }

    #[test]
    fn test_toml_error_converts() {
        let parsed: std::result::Result<crate::models::FormDocument, _> = toml::from_str("fields = 3");
        let err: Error = parsed.unwrap_err().into();
        assert!(err.to_string().starts_with("invalid form document"));
    }
}
