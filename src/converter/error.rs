//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载转换链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 任何错误都意味着本次转换整体失败，不会返回部分结果。

/// 转换链路统一错误类型。
///
/// 该类型会在应用层被上转为 `AppError`，最终输出到命令行。
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("参数错误：{0}")]
    InvalidOption(String),
}

impl ConvertError {
    /// 稳定的错误码，便于脚本按类别处理失败。
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileSystem(_) => "file_system",
            Self::InvalidFormat(_) => "invalid_format",
            Self::Decode(_) => "decode",
            Self::ResourceLimit(_) => "resource_limit",
            Self::InvalidOption(_) => "invalid_option",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConvertError;

    #[test]
    fn codes_are_stable_per_variant() {
        assert_eq!(ConvertError::FileSystem(String::new()).code(), "file_system");
        assert_eq!(ConvertError::InvalidFormat(String::new()).code(), "invalid_format");
        assert_eq!(ConvertError::Decode(String::new()).code(), "decode");
        assert_eq!(ConvertError::ResourceLimit(String::new()).code(), "resource_limit");
        assert_eq!(ConvertError::InvalidOption(String::new()).code(), "invalid_option");
    }
}
