use core::fmt;
use std::env;

use serde::Deserialize;

use crate::internal::auth::enums::AuthScheme;
use crate::internal::auth::structs::WebdavCredentials;
use crate::internal::webdav::enums::ParentCreation;

use super::webdav_error::WebdavError;

/// 环境变量名
pub mod env_var_names {
    /// 用户名
    pub const WEBDAV_USERNAME: &str = "WEBDAV_USERNAME";
    /// 密码
    pub const WEBDAV_PASSWORD: &str = "WEBDAV_PASSWORD";
    /// 认证方案：basic / digest / ntlm
    pub const WEBDAV_AUTH_SCHEME: &str = "WEBDAV_AUTH_SCHEME";
    /// 父目录创建策略：on_conflict / eager
    pub const WEBDAV_PARENT_CREATION: &str = "WEBDAV_PARENT_CREATION";
}

/// 客户端构造参数
///
/// 支持 serde 反序列化，未出现的字段取默认值，可直接嵌进上层应用的配置文件
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_scheme: AuthScheme,
    pub parent_creation: ParentCreation,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    pub fn with_parent_creation(
        mut self,
        parent_creation: ParentCreation,
    ) -> Self {
        self.parent_creation = parent_creation;
        self
    }

    /// 从进程环境变量读取，变量名见 [`env_var_names`]
    pub fn from_env() -> Result<Self, WebdavError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意键值来源读取，`from_env` 基于它实现
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WebdavError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self {
            username: lookup(env_var_names::WEBDAV_USERNAME),
            password: lookup(env_var_names::WEBDAV_PASSWORD),
            ..Self::default()
        };

        if let Some(raw) = lookup(env_var_names::WEBDAV_AUTH_SCHEME) {
            options.auth_scheme =
                raw.parse().map_err(WebdavError::InvalidOption)?;
        }
        if let Some(raw) = lookup(env_var_names::WEBDAV_PARENT_CREATION) {
            options.parent_creation =
                raw.parse().map_err(WebdavError::InvalidOption)?;
        }

        Ok(options)
    }

    /// 组装凭证；用户名密码只给了一半时报错
    pub(crate) fn credentials(
        &self,
    ) -> Result<Option<WebdavCredentials>, WebdavError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Some(
                WebdavCredentials::new(username, password, self.auth_scheme),
            )),
            (None, None) => Ok(None),
            _ => Err(WebdavError::IncompleteCredentials),
        }
    }
}

/// 防止debug泄漏账号
impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("username", &self.username.as_ref().map(|_| "<hidden>"))
            .field("password", &self.password.as_ref().map(|_| "<hidden>"))
            .field("auth_scheme", &self.auth_scheme)
            .field("parent_creation", &self.parent_creation)
            .finish()
    }
}
