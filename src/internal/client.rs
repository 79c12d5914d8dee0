//! 客户端领域模块：构造一次，之后反复调用各项操作。
//!
//! 对外导出以 [`crate::client`] 为准，此处仅做模块划分。

pub mod impl_operations;
pub mod structs;
