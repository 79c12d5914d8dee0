use core::fmt;

use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, BoxStream, StreamExt};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use super::transport_error::TransportError;

pub type ByteStream = BoxStream<'static, Result<Bytes, TransportError>>;

/// 响应体：已完整缓存，或者仍在流式读取
pub enum ResponseBody {
    Full(Bytes),
    Stream(ByteStream),
}

/// Transport 返回的原始结果，DELETE / MKCOL 会原样交给调用方
pub struct TransportResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl TransportResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self { status, headers, body: ResponseBody::Full(body) }
    }

    pub fn streaming(
        status: StatusCode,
        headers: HeaderMap,
        stream: ByteStream,
    ) -> Self {
        Self { status, headers, body: ResponseBody::Stream(stream) }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// 读取完整响应体
    pub async fn bytes(self) -> Result<Bytes, TransportError> {
        match self.body {
            ResponseBody::Full(bytes) => Ok(bytes),
            ResponseBody::Stream(mut stream) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }

    pub fn into_stream(self) -> ByteStream {
        match self.body {
            ResponseBody::Full(bytes) if bytes.is_empty() => {
                stream::empty().boxed()
            }
            ResponseBody::Full(bytes) => stream::once(async move { Ok(bytes) }).boxed(),
            ResponseBody::Stream(stream) => stream,
        }
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            ResponseBody::Full(bytes) => format!("<{} bytes>", bytes.len()),
            ResponseBody::Stream(_) => "<stream>".to_string(),
        };
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &body)
            .finish()
    }
}
