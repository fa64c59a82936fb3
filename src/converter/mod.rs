//! # 图片转换模块（converter）
//!
//! ## 设计思路
//!
//! 该模块将“文件加载校验 → 解码 → 像素编码 → 数组序列化”按职责拆分为多个子模块，
//! 核心编码与序列化均为纯函数，不依赖任何界面或全局状态。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责文件读取与签名校验
//! - `pipeline`：负责解码、像素上限与纯编码函数 `convert`
//! - `codec`：单像素 RGB565 / 字节交换 / 亮度计算
//! - `serializer`：头文件渲染与标识符清洗
//! - `preview`：RGB565 往返预览图
//! - `config/error/format/source`：配置、错误、格式枚举、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（参数解析 + 设置合并）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 / 体积 / 签名校验）
//!    ├─ pipeline.rs（解码 + 像素限制 + convert）
//!    │     └─ codec.rs（逐像素编码）
//!    └─ serializer.rs（标识符清洗 + 头文件文本）
//!    ↓
//! RenderedHeader → 写文件 / 标准输出
//! ```

pub mod codec;
mod config;
mod error;
mod format;
mod handler;
mod loader;
mod pipeline;
pub mod preview;
pub mod serializer;
mod source;

pub use config::{ConversionRequest, ConverterConfig};
pub use error::ConvertError;
pub use format::{ElementWidth, OutputFormat, TransparentColor};
pub use handler::Converter;
pub use pipeline::convert;
pub use source::{ConversionResult, EncodedData, LoadedImage, RenderedHeader};
