//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，汇总转换链路与文件 I/O 的错误，
//! 命令行入口只需处理这一种错误类型。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ConvertError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::converter::ConvertError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图片转换链路错误（加载 / 解码 / 参数）
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 稳定错误码，用于日志检索。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Convert(err) => err.code(),
            Self::Io(_) => "io",
        }
    }

    /// 进程退出码：参数类错误返回 2，其余返回 1。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Convert(ConvertError::InvalidOption(_)) => 2,
            _ => 1,
        }
    }
}
