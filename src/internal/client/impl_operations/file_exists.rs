use crate::internal::client::structs::{WebdavClient, WebdavError};
use crate::internal::transport::traits::Transport;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::ensure_status::is_existing;

impl<T: Transport> WebdavClient<T> {
    /// 资源是否存在
    ///
    /// - 发出不带凭证的 HEAD，状态码在 200..=209 之间即视为存在（含 207）
    /// - 其余状态码一律返回 `false`，连接层错误照常上抛
    pub async fn file_exists(&self, path: &str) -> Result<bool, WebdavError> {
        let url = self.resolve(path)?;
        let response =
            self.dispatch(WebDavMethod::HEAD, url, None, false).await?;

        Ok(is_existing(response.status()))
    }
}
