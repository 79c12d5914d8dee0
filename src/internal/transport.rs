//! 传输层：负责把单个 WebDAV 请求发出去，不关心重试和状态码含义。
//!
//! 对外导出以 [`crate::transport`] 为准。

pub mod structs;
pub mod traits;
