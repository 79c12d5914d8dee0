use std::path::{Path, PathBuf};

use tokio::io::AsyncWrite;

/// 下载目的地，调用入口处一次性确定
///
/// - `Path`：以二进制写方式打开，不存在则创建，存在则截断；句柄随调用结束关闭
/// - `Writer`：调用方已打开的字节流，只借用：成功时 flush，不会 shutdown，
///   任何退出路径下都由持有者负责关闭
pub enum DownloadTarget<'a> {
    Path(PathBuf),
    Writer(&'a mut (dyn AsyncWrite + Unpin + Send)),
}

impl From<PathBuf> for DownloadTarget<'_> {
    fn from(path: PathBuf) -> Self {
        DownloadTarget::Path(path)
    }
}

impl From<&Path> for DownloadTarget<'_> {
    fn from(path: &Path) -> Self {
        DownloadTarget::Path(path.to_path_buf())
    }
}

impl From<&str> for DownloadTarget<'_> {
    fn from(path: &str) -> Self {
        DownloadTarget::Path(PathBuf::from(path))
    }
}

impl<'a, W> From<&'a mut W> for DownloadTarget<'a>
where
    W: AsyncWrite + Unpin + Send,
{
    fn from(writer: &'a mut W) -> Self {
        DownloadTarget::Writer(writer)
    }
}
