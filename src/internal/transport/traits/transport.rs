//! 传输层 trait：客户端只通过它发请求，便于替换为自定义实现或测试替身。

use std::sync::Arc;

use async_trait::async_trait;

use crate::internal::transport::structs::{
    TransportError, TransportRequest, TransportResponse,
};

/// 发出单个 HTTP/WebDAV 请求并返回原始响应
///
/// 实现方负责：
/// - 把 [`WebDavMethod`](crate::webdav::enums::WebDavMethod) 转成真实请求方法；
/// - `credentials` 存在时调用其 `attach` 挂载认证信息；
/// - 连接、TLS、超时等全部细节。
///
/// 非 2xx 状态码不是错误，原样放进 [`TransportResponse`]。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}
