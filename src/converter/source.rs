//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“加载中间结果”“编码结果”和“渲染产物”解耦：
//! - `RawImageData` 表示已读取并通过签名校验、但未解码的字节
//! - `LoadedImage` 表示解码完成的 RGBA 像素
//! - `EncodedData` 表示按行优先顺序排列的编码值
//! - `ConversionResult` 表示纯转换的输出（编码值 + 尺寸 + 格式）
//! - `RenderedHeader` 表示可直接落盘的头文件文本

use std::path::PathBuf;

use image::{ImageFormat, RgbaImage};

use super::OutputFormat;

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    pub(crate) bytes: Vec<u8>,
    pub(crate) path: PathBuf,
    /// 由魔数或扩展名确定的解码格式。
    pub(crate) format: ImageFormat,
}

/// 解码阶段输出：源文件信息与 RGBA 像素。
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// 源文件路径，用于推导变量名。
    pub path: PathBuf,
    /// 源文件名（含扩展名），写入头文件注释。
    pub file_name: String,
    pub image: RgbaImage,
}

/// 编码后的数组元素，顺序与源像素行优先顺序一致。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedData {
    /// RGB565 系列：每像素一个 16 位值。
    Words(Vec<u16>),
    /// RGB888（每像素 3 个）或灰度（每像素 1 个）8 位值。
    Bytes(Vec<u8>),
}

impl EncodedData {
    pub fn len(&self) -> usize {
        match self {
            Self::Words(values) => values.len(),
            Self::Bytes(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 渲染为定宽十六进制字面量（`0x%04X` / `0x%02X`）。
    pub fn hex_literals(&self) -> Vec<String> {
        match self {
            Self::Words(values) => values.iter().map(|v| format!("0x{:04X}", v)).collect(),
            Self::Bytes(values) => values.iter().map(|v| format!("0x{:02X}", v)).collect(),
        }
    }
}

/// 单次转换结果。
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// 已归一的输出格式（不会是 `Cardputer`）。
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    pub data: EncodedData,
}

impl ConversionResult {
    /// 数组元素个数。
    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    /// 数组占用字节数。
    pub fn byte_count(&self) -> usize {
        self.element_count() * self.format.element_width().byte_size()
    }
}

/// 渲染完成的头文件。
#[derive(Debug, Clone)]
pub struct RenderedHeader {
    /// 经过清洗的数组标识符。
    pub var_name: String,
    /// 完整头文件文本（以换行结尾）。
    pub text: String,
    pub result: ConversionResult,
}
