use core::fmt;

use url::Url;

use crate::internal::auth::enums::AuthScheme;
use crate::internal::auth::structs::WebdavCredentials;
use crate::internal::transport::structs::{
    ReqwestTransport, TransportError, TransportRequest, TransportResponse,
};
use crate::internal::transport::traits::Transport;
use crate::internal::webdav::enums::{ParentCreation, WebDavMethod};
use crate::internal::webdav::structs::WebdavUrl;

use super::client_options::ClientOptions;
use super::webdav_error::WebdavError;

/// WebDav客户端对象
///
/// - 构造后不可变，不持有任何单次调用的状态，可以放进 Arc 给多个调用方共用
/// - 构造 URL 中内嵌的 `user:pass@` 优先于 `ClientOptions` 里的用户名密码
/// - 各项操作见 `impl_operations` 下的实现
pub struct WebdavClient<T: Transport = ReqwestTransport> {
    url: WebdavUrl,
    credentials: Option<WebdavCredentials>,
    parent_creation: ParentCreation,
    transport: T,
}

impl WebdavClient<ReqwestTransport> {
    /// 使用默认的 reqwest 传输层创建客户端
    ///
    /// example:
    /// ```
    /// use webdav_put::{ClientOptions, WebdavClient};
    ///
    /// let client = WebdavClient::new(
    ///     "https://dav.example.com:8443/remote.php/webdav/",
    ///     ClientOptions::new().with_credentials("account", "password"),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(client.host(), "https://dav.example.com:8443");
    /// ```
    pub fn new(url: &str, options: ClientOptions) -> Result<Self, WebdavError> {
        Self::with_transport(url, options, ReqwestTransport::new()?)
    }
}

impl<T: Transport> WebdavClient<T> {
    /// 使用自定义传输层创建客户端
    pub fn with_transport(
        url: &str,
        options: ClientOptions,
        transport: T,
    ) -> Result<Self, WebdavError> {
        let (url, user_info) = WebdavUrl::parse_with_user_info(url)?;

        let credentials = match user_info {
            Some(info) => Some(WebdavCredentials::new(
                &info.username,
                &info.password,
                options.auth_scheme,
            )),
            None => options.credentials()?,
        };

        Ok(Self {
            url,
            credentials,
            parent_creation: options.parent_creation,
            transport,
        })
    }

    /// `scheme://host[:port]`
    pub fn host(&self) -> &str {
        self.url.host()
    }

    pub fn base_url(&self) -> &Url {
        self.url.base_url()
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(WebdavCredentials::username)
    }

    pub fn auth_scheme(&self) -> Option<AuthScheme> {
        self.credentials.as_ref().map(WebdavCredentials::auth_scheme)
    }

    pub fn parent_creation(&self) -> ParentCreation {
        self.parent_creation
    }

    /// 把资源路径解析成完整 URL
    pub fn resolve(&self, path: &str) -> Result<Url, WebdavError> {
        self.url.resolve(path)
    }

    pub(crate) fn webdav_url(&self) -> &WebdavUrl {
        &self.url
    }

    /// 发出单个请求；`authenticated` 为 false 时不挂凭证
    pub(crate) async fn dispatch(
        &self,
        method: WebDavMethod,
        url: Url,
        body: Option<bytes::Bytes>,
        authenticated: bool,
    ) -> Result<TransportResponse, TransportError> {
        let credentials = if authenticated {
            self.credentials.clone()
        } else {
            None
        };

        tracing::debug!(
            method = %method,
            url = %url,
            authenticated = credentials.is_some(),
            "sending webdav request"
        );

        let mut request =
            TransportRequest::new(method, url).with_credentials(credentials);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.transport.send(request).await?;

        tracing::debug!(method = %method, status = %response.status(), "webdav response");

        Ok(response)
    }
}

/// 防止debug泄漏账号
impl<T: Transport> fmt::Debug for WebdavClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebdavClient")
            .field("host", &self.url.host())
            .field("base_url", &self.url.base_url().as_str())
            .field("credentials", &self.credentials)
            .field("parent_creation", &self.parent_creation)
            .finish()
    }
}
