//! # 输出格式模块
//!
//! ## 设计思路
//!
//! 输出格式与透明替换色均为封闭集合，使用枚举表达并在各处穷举匹配，
//! 取代按字符串分支的动态判断。
//!
//! ## 实现思路
//!
//! - `OutputFormat` 负责格式字符串解析、别名归一（`cardputer` → `rgb565_swapped`）
//!   以及序列化阶段需要的元素类型、每行数量等参数。
//! - `TransparentColor` 负责替换色名称解析与 RGB 取值。

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use super::ConvertError;

/// 数组元素宽度。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementWidth {
    /// 16 位元素，渲染为 `0x%04X`。
    Word,
    /// 8 位元素，渲染为 `0x%02X`。
    Byte,
}

impl ElementWidth {
    pub fn c_type(self) -> &'static str {
        match self {
            Self::Word => "uint16_t",
            Self::Byte => "uint8_t",
        }
    }

    pub fn byte_size(self) -> usize {
        match self {
            Self::Word => 2,
            Self::Byte => 1,
        }
    }
}

/// 输出像素格式。
///
/// - `Cardputer`：默认别名，等价于 `Rgb565Swapped`
/// - `Rgb565`：16 位，主机字节序
/// - `Rgb565Swapped`：16 位，高低字节互换（推荐）
/// - `Rgb888`：每像素 3 字节
/// - `Grayscale`：每像素 1 字节亮度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Cardputer,
    Rgb565,
    Rgb565Swapped,
    Rgb888,
    Grayscale,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        Self::Cardputer,
        Self::Rgb565,
        Self::Rgb565Swapped,
        Self::Rgb888,
        Self::Grayscale,
    ];

    /// 归一别名：`Cardputer` 解析为 `Rgb565Swapped`，其余保持不变。
    pub fn resolve(self) -> Self {
        match self {
            Self::Cardputer => Self::Rgb565Swapped,
            other => other,
        }
    }

    /// 稳定的选项字符串，与命令行/配置文件中的取值一致。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cardputer => "cardputer",
            Self::Rgb565 => "rgb565",
            Self::Rgb565Swapped => "rgb565_swapped",
            Self::Rgb888 => "rgb888",
            Self::Grayscale => "grayscale",
        }
    }

    /// 头文件注释中使用的格式名。
    pub fn display_name(self) -> &'static str {
        match self.resolve() {
            Self::Rgb565 => "RGB565",
            Self::Rgb565Swapped | Self::Cardputer => "RGB565_SWAPPED",
            Self::Rgb888 => "RGB888",
            Self::Grayscale => "GRAYSCALE",
        }
    }

    pub fn element_width(self) -> ElementWidth {
        match self.resolve() {
            Self::Rgb565 | Self::Rgb565Swapped | Self::Cardputer => ElementWidth::Word,
            Self::Rgb888 | Self::Grayscale => ElementWidth::Byte,
        }
    }

    /// 每个源像素产生的数组元素个数。
    pub fn elements_per_pixel(self) -> usize {
        match self.resolve() {
            Self::Rgb888 => 3,
            _ => 1,
        }
    }

    /// 每行输出的数值个数；RGB888 取 15 以便三元组对齐。
    pub fn values_per_line(self) -> usize {
        match self.resolve() {
            Self::Rgb888 => 15,
            _ => 12,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "cardputer" | "default" => Ok(Self::Cardputer),
            "rgb565" => Ok(Self::Rgb565),
            "rgb565_swapped" => Ok(Self::Rgb565Swapped),
            "rgb888" => Ok(Self::Rgb888),
            "grayscale" => Ok(Self::Grayscale),
            other => Err(ConvertError::InvalidOption(format!(
                "未知输出格式：{}（可选：cardputer / rgb565 / rgb565_swapped / rgb888 / grayscale）",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 透明像素替换色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparentColor {
    Black,
    White,
    Magenta,
}

impl TransparentColor {
    pub fn rgb(self) -> Rgb<u8> {
        match self {
            Self::Black => Rgb([0, 0, 0]),
            Self::White => Rgb([255, 255, 255]),
            Self::Magenta => Rgb([255, 0, 255]),
        }
    }

    /// 解析替换色选项；`none` 表示保留解码得到的原始 RGB。
    pub fn parse_option(value: &str) -> Result<Option<Self>, ConvertError> {
        match value.trim().to_lowercase().as_str() {
            "none" | "" => Ok(None),
            "black" => Ok(Some(Self::Black)),
            "white" => Ok(Some(Self::White)),
            "magenta" => Ok(Some(Self::Magenta)),
            other => Err(ConvertError::InvalidOption(format!(
                "未知透明替换色：{}（可选：none / black / white / magenta）",
                other
            ))),
        }
    }
}
