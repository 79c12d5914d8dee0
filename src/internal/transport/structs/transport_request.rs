use bytes::Bytes;
use url::Url;

use crate::internal::auth::structs::WebdavCredentials;
use crate::internal::webdav::enums::WebDavMethod;

/// 交给 Transport 的单个请求
///
/// `credentials` 即凭证挂载钩子，为 `None` 时请求不带认证信息
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: WebDavMethod,
    pub url: Url,
    pub body: Option<Bytes>,
    pub credentials: Option<WebdavCredentials>,
}

impl TransportRequest {
    pub fn new(method: WebDavMethod, url: Url) -> Self {
        Self { method, url, body: None, credentials: None }
    }

    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_credentials(
        mut self,
        credentials: Option<WebdavCredentials>,
    ) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}
