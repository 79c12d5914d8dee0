//! 传输层错误类型。

use thiserror::Error;

use crate::internal::auth::enums::AuthScheme;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("无效的 HTTP 方法: {0}")]
    InvalidMethod(String),

    #[error("无效的请求头: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// 需要质询/应答的方案不在本库范围内
    #[error("不支持的认证方案: {0}")]
    UnsupportedAuthScheme(AuthScheme),

    /// 供自定义 Transport 报告连接层失败
    #[error("连接失败: {0}")]
    Connection(String),
}
