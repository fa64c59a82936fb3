//! # RGB565 预览模块
//!
//! 将每个像素经 RGB565 往返一次，得到目标屏幕上的实际显示效果，
//! 可选按最近邻缩放（保留像素级细节），并保存为 PNG 便于肉眼比对。

use std::path::Path;

use image::imageops::FilterType;
use image::{ImageFormat, RgbImage, Rgb, RgbaImage};

use super::codec::{resolve_pixel, rgb565_to_rgb, rgb_to_rgb565};
use super::ConvertError;

/// 生成 RGB565 往返后的预览图。
pub fn render_rgb565_preview(image: &RgbaImage, transparent_color: Option<Rgb<u8>>) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = resolve_pixel(*image.get_pixel(x, y), transparent_color);
        rgb565_to_rgb(rgb_to_rgb565(r, g, b))
    })
}

/// 等比缩放到单边不超过 `max_dimension`；不放大。
pub fn fit_preview(preview: RgbImage, max_dimension: u32) -> RgbImage {
    let (width, height) = preview.dimensions();
    if max_dimension == 0 || (width <= max_dimension && height <= max_dimension) {
        return preview;
    }

    let ratio = (max_dimension as f64 / width as f64).min(max_dimension as f64 / height as f64);
    let target_width = ((width as f64 * ratio) as u32).max(1);
    let target_height = ((height as f64 * ratio) as u32).max(1);

    image::imageops::resize(&preview, target_width, target_height, FilterType::Nearest)
}

/// 将预览图保存为 PNG。
pub fn save_preview(preview: &RgbImage, path: &Path) -> Result<(), ConvertError> {
    preview
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ConvertError::FileSystem(format!("保存预览图失败：{}", e)))?;

    log::info!(
        "🖼️ 预览图已保存 - 路径: {} 尺寸: {}x{}",
        path.display(),
        preview.width(),
        preview.height()
    );
    Ok(())
}
