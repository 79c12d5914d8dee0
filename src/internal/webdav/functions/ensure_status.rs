use reqwest::StatusCode;

use crate::internal::client::structs::webdav_error::WebdavError;

/// 下载成功的状态码
pub(crate) const GET_ACCEPTED: &[StatusCode] = &[StatusCode::OK];

/// 上传成功的状态码：新建或覆盖
pub(crate) const PUT_ACCEPTED: &[StatusCode] =
    &[StatusCode::CREATED, StatusCode::NO_CONTENT];

/// 逐级建目录时可以继续的状态码，405 表示集合已存在
pub(crate) const MKCOL_CONTINUE: &[StatusCode] =
    &[StatusCode::CREATED, StatusCode::METHOD_NOT_ALLOWED];

/// 把受检操作（get / put）的状态码翻译成错误
///
/// `action` 只在失败时才会被调用
pub(crate) fn ensure_status<F>(
    action: F,
    status: StatusCode,
    accepted: &[StatusCode],
) -> Result<StatusCode, WebdavError>
where
    F: FnOnce() -> String,
{
    if accepted.contains(&status) {
        Ok(status)
    } else {
        Err(WebdavError::OperationFailed { action: action(), status })
    }
}

/// HEAD 的判定：200..=209 都算存在（含 207 Multi-Status）
pub(crate) fn is_existing(status: StatusCode) -> bool {
    (200..=209).contains(&status.as_u16())
}
