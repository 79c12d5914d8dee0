use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::Deserialize;

use crate::internal::transport::structs::transport_error::TransportError;

/// 本库会发出的 HTTP/WebDAV 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebDavMethod {
    HEAD,
    GET,
    PUT,
    DELETE,
    /// 创建集合（目录）
    MKCOL,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::HEAD => "HEAD",
            WebDavMethod::GET => "GET",
            WebDavMethod::PUT => "PUT",
            WebDavMethod::DELETE => "DELETE",
            WebDavMethod::MKCOL => "MKCOL",
        }
    }

    pub fn to_method(&self) -> Result<Method, TransportError> {
        match self {
            WebDavMethod::HEAD => Ok(Method::HEAD),
            WebDavMethod::GET => Ok(Method::GET),
            WebDavMethod::PUT => Ok(Method::PUT),
            WebDavMethod::DELETE => Ok(Method::DELETE),
            WebDavMethod::MKCOL => Method::from_bytes(self.as_str().as_bytes())
                .map_err(|e| TransportError::InvalidMethod(e.to_string())),
        }
    }
}

impl fmt::Display for WebDavMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 上传时缺失父目录的创建策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentCreation {
    /// 先 PUT，收到 409 后逐级 MKCOL，再重试一次 PUT
    #[default]
    OnConflict,
    /// PUT 之前先逐级 MKCOL，跳过带扩展名的路径段
    Eager,
}

impl FromStr for ParentCreation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on_conflict" | "on-conflict" => Ok(ParentCreation::OnConflict),
            "eager" => Ok(ParentCreation::Eager),
            other => Err(format!("未知的父目录创建策略: {other}")),
        }
    }
}
