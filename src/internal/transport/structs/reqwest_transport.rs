use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use reqwest::redirect::Policy;

use crate::internal::transport::traits::Transport;

use super::{TransportError, TransportRequest, TransportResponse};

/// 基于 reqwest 的默认 Transport
///
/// 内部的 `Client` 本身是 Arc，Clone 很便宜
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// 创建默认客户端（仅 HTTP/1，rustls，不跟随重定向）
    pub fn new() -> Result<Self, TransportError> {
        // 3xx 原样返回；跟随重定向会把 DELETE/MKCOL 重发到 Location 指向的资源
        let client = Client::builder()
            .http1_only()
            .redirect(Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// 使用调用方自行配置的客户端（超时、代理、证书等）
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let TransportRequest { method, url, body, credentials } = request;

        let mut builder = self.client.request(method.to_method()?, url);

        if let Some(credentials) = &credentials {
            builder = credentials.attach(builder)?;
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let res = builder.send().await?;

        let status = res.status();
        let headers = res.headers().clone();
        let stream = res
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from))
            .boxed();

        Ok(TransportResponse::streaming(status, headers, stream))
    }
}
