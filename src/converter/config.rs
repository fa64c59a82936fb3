//! # 配置模块
//!
//! ## 设计思路
//!
//! 区分两类配置：
//! - `ConversionRequest`：单次转换的请求参数（格式、变量名、透明替换色），
//!   一次转换内不可变。
//! - `ConverterConfig`：加载阶段的资源上限，随 `Converter` 实例存在。
//!
//! ## 实现思路
//!
//! - `Default` 提供与原工具一致的默认值（`cardputer` 格式、无替换色）。
//! - 构建器风格的 `with_*` 方法便于命令行层逐项覆盖。

use image::Rgb;

use super::{OutputFormat, TransparentColor};

/// 单次转换请求。
#[derive(Debug, Clone, Default)]
pub struct ConversionRequest {
    /// 输出格式。
    pub format: OutputFormat,
    /// 数组变量名；为空时由输入文件名推导。
    pub var_name: Option<String>,
    /// 透明像素（alpha < 128）的替换色；`None` 表示保留原始 RGB。
    pub transparent_color: Option<Rgb<u8>>,
}

impl ConversionRequest {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = Some(name.into());
        self
    }

    pub fn with_transparent_color(mut self, color: Option<TransparentColor>) -> Self {
        self.transparent_color = color.map(TransparentColor::rgb);
        self
    }

    /// 返回去除首尾空白后的非空变量名。
    pub(crate) fn explicit_var_name(&self) -> Option<&str> {
        self.var_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// 加载阶段资源上限。
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// 读取源文件时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 预览图单边最大尺寸；`None` 表示保持原尺寸。
    pub preview_max_dimension: Option<u32>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            preview_max_dimension: None,
        }
    }
}
