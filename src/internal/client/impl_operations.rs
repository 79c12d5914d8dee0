//! 客户端各项操作的实现，每个文件一个操作。
//!
//! - get_file / put_file 为受检操作，状态码不符合预期时返回 `OperationFailed`
//! - delete_file / make_directory 原样返回响应，由调用方自行判断状态码

mod delete_file;
mod file_exists;
mod get_file;
mod make_directory;
mod put_file;
