//! 客户端操作的错误类型。

use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::transport::structs::TransportError;

#[derive(Debug, Error)]
pub enum WebdavError {
    /// 受检操作（get_file / put_file）最终状态码不符合预期
    #[error("WebDAV 客户端执行 {action} 时失败，状态码: {status}")]
    OperationFailed { action: String, status: StatusCode },

    /// 连接、DNS、TLS 等失败，原样上抛
    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("本地文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("路径格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("服务器地址无效: {0}")]
    InvalidBaseUrl(String),

    #[error("用户名和密码必须同时提供")]
    IncompleteCredentials,

    #[error("配置项无效: {0}")]
    InvalidOption(String),
}

impl WebdavError {
    /// 失败时的状态码，仅 `OperationFailed` 有
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WebdavError::OperationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
