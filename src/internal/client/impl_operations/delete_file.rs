use crate::internal::client::structs::{WebdavClient, WebdavError};
use crate::internal::transport::structs::TransportResponse;
use crate::internal::transport::traits::Transport;
use crate::internal::webdav::enums::WebDavMethod;

impl<T: Transport> WebdavClient<T> {
    /// 删除资源，原样返回响应，不翻译状态码，也不重试
    pub async fn delete_file(
        &self,
        path: &str,
    ) -> Result<TransportResponse, WebdavError> {
        let url = self.resolve(path)?;
        Ok(self.dispatch(WebDavMethod::DELETE, url, None, true).await?)
    }
}
