use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::{
    RequestBuilder,
    header::{AUTHORIZATION, HeaderValue},
};
use sha2::{Digest, Sha256};

use crate::internal::auth::enums::AuthScheme;
use crate::internal::transport::structs::transport_error::TransportError;

/// 凭证结构体
///
/// 该结构体定位
/// - 保存用户名、密码与认证方案
/// - 作为请求的凭证挂载钩子，由 Transport 在发送前调用 [`attach`](Self::attach)
///
/// 默认Eq时比较的是token指纹和认证方案，不会直接比较明文
#[derive(Clone)]
pub struct WebdavCredentials {
    username: Arc<str>,
    password: Arc<str>, // 不对外暴露
    auth_scheme: AuthScheme,
    fingerprint: Arc<String>,
}

impl WebdavCredentials {
    pub fn new(
        username: &str,
        password: &str,
        auth_scheme: AuthScheme,
    ) -> Self {
        let token = _encode_token(username, password);

        Self {
            username: Arc::from(username),
            password: Arc::from(password),
            auth_scheme,
            fingerprint: Arc::new(_fingerprint(&token)),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }

    /// 仅比较token是否相等，忽略认证方案
    pub fn eq_only_token(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }

    /// 生成 `Authorization` 头，已标记为敏感值
    pub fn authorization_header(
        &self,
    ) -> Result<HeaderValue, TransportError> {
        match self.auth_scheme {
            AuthScheme::Basic => {
                let token = _encode_token(&self.username, &self.password);
                let mut value =
                    HeaderValue::from_str(&format!("Basic {token}"))?;
                value.set_sensitive(true);
                Ok(value)
            }
            other => Err(TransportError::UnsupportedAuthScheme(other)),
        }
    }

    /// 把凭证挂到请求上
    pub fn attach(
        &self,
        builder: RequestBuilder,
    ) -> Result<RequestBuilder, TransportError> {
        Ok(builder.header(AUTHORIZATION, self.authorization_header()?))
    }
}

impl PartialEq for WebdavCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && self.auth_scheme == other.auth_scheme
    }
}

impl Eq for WebdavCredentials {}

/// 防止debug泄漏账号
impl fmt::Debug for WebdavCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavCredentials")
            .field("auth_scheme", &self.auth_scheme)
            .field("credentials", &"<hidden>")
            .finish()
    }
}

fn _encode_token(username: &str, password: &str) -> String {
    base64::engine::general_purpose::STANDARD
        .encode(format!("{username}:{password}"))
}

fn _fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
