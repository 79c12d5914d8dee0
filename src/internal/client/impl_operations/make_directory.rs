use crate::internal::client::structs::{WebdavClient, WebdavError};
use crate::internal::transport::structs::TransportResponse;
use crate::internal::transport::traits::Transport;
use crate::internal::webdav::enums::WebDavMethod;

impl<T: Transport> WebdavClient<T> {
    /// MKCOL 创建集合，原样返回响应
    pub async fn make_directory(
        &self,
        path: &str,
    ) -> Result<TransportResponse, WebdavError> {
        let url = self.resolve(path)?;
        Ok(self.dispatch(WebDavMethod::MKCOL, url, None, true).await?)
    }
}
