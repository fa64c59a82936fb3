//! # 解码与编码流水线模块
//!
//! ## 设计思路
//!
//! 分两段：
//! - `decode_to_rgba`：字节 → RGBA，先读 header 尺寸按像素上限快速拒绝，再完整解码
//! - `convert`：纯函数，RGBA 像素 → 编码值，不做任何 I/O
//!
//! ## 实现思路
//!
//! `convert` 按行优先顺序逐像素映射，输出顺序与源像素一一对应。
//! 灰度格式先整体去色为独立亮度图，再逐像素取值。

use std::io::Cursor;

use image::{GenericImageView, ImageFormat, RgbaImage};

use super::codec::{desaturate, resolve_pixel, rgb_to_rgb565, swap_bytes};
use super::source::{LoadedImage, RawImageData};
use super::{ConversionRequest, ConversionResult, ConvertError, Converter, ConverterConfig, EncodedData, OutputFormat};

impl Converter {
    /// 将原始字节解码为 RGBA 图像。
    pub(super) fn decode_to_rgba(
        &self,
        raw: RawImageData,
        config: &ConverterConfig,
    ) -> Result<LoadedImage, ConvertError> {
        let (header_width, header_height) =
            Self::inspect_dimensions_from_memory(&raw.bytes, raw.format)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::ImageReader::with_format(Cursor::new(&raw.bytes), raw.format)
            .decode()
            .map_err(|e| ConvertError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        Self::validate_pixel_limits(config, width, height)?;

        let image = decoded.to_rgba8();

        let file_name = raw
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::info!(
            "✅ 图片解码成功 - 文件: {} 尺寸: {}x{} 色彩: {:?}",
            file_name,
            width,
            height,
            decoded.color()
        );

        Ok(LoadedImage {
            path: raw.path,
            file_name,
            image,
        })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(
        bytes: &[u8],
        format: ImageFormat,
    ) -> Result<(u32, u32), ConvertError> {
        image::ImageReader::with_format(Cursor::new(bytes), format)
            .into_dimensions()
            .map_err(|e| ConvertError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        config: &ConverterConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ConvertError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ConvertError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}

/// 按请求将 RGBA 图像编码为数组元素。
///
/// # 示例
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use image_header_converter::converter::{convert, ConversionRequest, EncodedData, OutputFormat};
///
/// let image = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
/// let result = convert(&image, &ConversionRequest::new(OutputFormat::Rgb565Swapped));
/// assert_eq!(result.data, EncodedData::Words(vec![0x00F8]));
/// ```
pub fn convert(image: &RgbaImage, request: &ConversionRequest) -> ConversionResult {
    let format = request.format.resolve();
    let substitute = request.transparent_color;
    let pixels = image.pixels().map(|pixel| resolve_pixel(*pixel, substitute));

    let data = match format {
        OutputFormat::Rgb565 => {
            EncodedData::Words(pixels.map(|p| rgb_to_rgb565(p[0], p[1], p[2])).collect())
        }
        OutputFormat::Rgb565Swapped | OutputFormat::Cardputer => EncodedData::Words(
            pixels
                .map(|p| swap_bytes(rgb_to_rgb565(p[0], p[1], p[2])))
                .collect(),
        ),
        OutputFormat::Rgb888 => EncodedData::Bytes(pixels.flat_map(|p| p.0).collect()),
        OutputFormat::Grayscale => EncodedData::Bytes(desaturate(image, substitute).into_raw()),
    };

    ConversionResult {
        format,
        width: image.width(),
        height: image.height(),
        data,
    }
}
