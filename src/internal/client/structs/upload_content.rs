use std::path::PathBuf;

use bytes::Bytes;

/// 上传内容
///
/// 文件只在调用入口读取一次，409 之后的重试复用同一份字节
#[derive(Debug, Clone)]
pub enum UploadContent {
    Bytes(Bytes),
    File(PathBuf),
}

impl UploadContent {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        UploadContent::File(path.into())
    }

    pub(crate) async fn into_bytes(self) -> Result<Bytes, std::io::Error> {
        match self {
            UploadContent::Bytes(bytes) => Ok(bytes),
            UploadContent::File(path) => tokio::fs::read(path).await.map(Bytes::from),
        }
    }
}

impl From<Bytes> for UploadContent {
    fn from(bytes: Bytes) -> Self {
        UploadContent::Bytes(bytes)
    }
}

impl From<Vec<u8>> for UploadContent {
    fn from(bytes: Vec<u8>) -> Self {
        UploadContent::Bytes(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for UploadContent {
    fn from(bytes: &'static [u8]) -> Self {
        UploadContent::Bytes(Bytes::from_static(bytes))
    }
}
