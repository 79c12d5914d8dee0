use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::internal::client::structs::{
    DownloadTarget, WebdavClient, WebdavError,
};
use crate::internal::transport::traits::Transport;
use crate::internal::webdav::enums::WebDavMethod;
use crate::internal::webdav::functions::ensure_status::{
    GET_ACCEPTED, ensure_status,
};

impl<T: Transport> WebdavClient<T> {
    /// 下载文件到本地路径或调用方提供的字节流
    ///
    /// - 只有 200 才会写入，其余状态码返回 `OperationFailed`
    /// - 目的地为路径时，文件句柄归本次调用所有，任何退出路径都会关闭
    pub async fn get_file<'a>(
        &self,
        remote_path: &str,
        target: impl Into<DownloadTarget<'a>>,
    ) -> Result<(), WebdavError> {
        match target.into() {
            DownloadTarget::Path(path) => {
                let mut file = File::create(&path).await?;
                self.download_into(remote_path, &mut file).await
            }
            DownloadTarget::Writer(writer) => {
                self.download_into(remote_path, writer).await
            }
        }
    }

    async fn download_into<W>(
        &self,
        remote_path: &str,
        sink: &mut W,
    ) -> Result<(), WebdavError>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let url = self.resolve(remote_path)?;
        let response =
            self.dispatch(WebDavMethod::GET, url, None, true).await?;

        ensure_status(
            || format!("getting file. {remote_path}"),
            response.status(),
            GET_ACCEPTED,
        )?;

        let mut stream = response.into_stream();
        let mut bytes_done: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            bytes_done += chunk.len() as u64;
            sink.write_all(&chunk).await?;
        }
        sink.flush().await?;

        tracing::debug!(remote_path, bytes_done, "file downloaded");

        Ok(())
    }
}
