//! 上传与缺失父目录的创建。
//!
//! 两种策略，由 [`ParentCreation`] 选择：
//! - `OnConflict`：先 PUT，409 时从浅到深逐级 MKCOL，全部成功后再 PUT 一次；
//! - `Eager`：PUT 之前先逐级 MKCOL，跳过带扩展名的路径段。
//!
//! 逐级 MKCOL 中 201 / 405 继续，其他状态码立即中止并把该状态码返回给调用方，不再 PUT。
//! 405 不会提前结束循环，每一级都会尝试。

use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

use crate::internal::client::structs::{
    UploadContent, WebdavClient, WebdavError,
};
use crate::internal::transport::traits::Transport;
use crate::internal::webdav::enums::{ParentCreation, WebDavMethod};
use crate::internal::webdav::functions::ensure_status::{
    MKCOL_CONTINUE, PUT_ACCEPTED, ensure_status,
};

impl<T: Transport> WebdavClient<T> {
    /// 上传文件，返回最终 PUT 的状态码（201 或 204）
    ///
    /// `create_parent_path` 为 true 时会按客户端的 [`ParentCreation`] 策略补建父目录；
    /// 补建途中 MKCOL 失败会直接返回该状态码（`Ok`），不会报错
    pub async fn put_file(
        &self,
        path: &str,
        content: impl Into<UploadContent>,
        create_parent_path: bool,
    ) -> Result<StatusCode, WebdavError> {
        let url = self.resolve(path)?;
        let body = content.into().into_bytes().await?;

        let status = match (create_parent_path, self.parent_creation()) {
            (false, _) => self.put_once(&url, &body).await?,
            (true, ParentCreation::OnConflict) => {
                let status = self.put_once(&url, &body).await?;
                if status != StatusCode::CONFLICT {
                    status
                } else {
                    tracing::info!(path, "parent collection missing, creating ancestors");

                    let ancestors = self.webdav_url().ancestor_urls(path)?;
                    if let Some(aborted) =
                        self.create_collections(ancestors).await?
                    {
                        return Ok(aborted);
                    }

                    self.put_once(&url, &body).await?
                }
            }
            (true, ParentCreation::Eager) => {
                let ancestors = self.webdav_url().eager_ancestor_urls(path)?;
                tracing::debug!(path, levels = ancestors.len(), "creating ancestors before upload");

                if let Some(aborted) = self.create_collections(ancestors).await? {
                    return Ok(aborted);
                }

                self.put_once(&url, &body).await?
            }
        };

        ensure_status(
            || format!("creating(putting file). File path: {path}"),
            status,
            PUT_ACCEPTED,
        )
    }

    async fn put_once(
        &self,
        url: &Url,
        body: &Bytes,
    ) -> Result<StatusCode, WebdavError> {
        let response = self
            .dispatch(WebDavMethod::PUT, url.clone(), Some(body.clone()), true)
            .await?;

        Ok(response.status())
    }

    /// 从浅到深依次 MKCOL；返回 `Some(status)` 表示在该状态码处中止
    async fn create_collections(
        &self,
        ancestors: Vec<Url>,
    ) -> Result<Option<StatusCode>, WebdavError> {
        for url in ancestors {
            let response = self
                .dispatch(WebDavMethod::MKCOL, url.clone(), None, true)
                .await?;
            let status = response.status();

            if !MKCOL_CONTINUE.contains(&status) {
                tracing::warn!(url = %url, status = %status, "creating collection failed, upload aborted");
                return Ok(Some(status));
            }
        }

        Ok(None)
    }
}
