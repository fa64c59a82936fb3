//! # 像素编解码模块
//!
//! 单像素级别的纯函数：RGB565 打包/展开、字节交换、透明替换与亮度计算。
//! 所有运算在 0–255 通道取值内封闭，不会失败。

use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};

/// alpha 低于该值视为透明像素。
pub const ALPHA_THRESHOLD: u8 = 128;

/// RGB888 → RGB565（5 位红、6 位绿、5 位蓝，截断低位）。
pub fn rgb_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// 交换 16 位值的高低字节。
pub fn swap_bytes(color: u16) -> u16 {
    ((color & 0xFF) << 8) | ((color >> 8) & 0xFF)
}

/// RGB565 → RGB888。
///
/// 左移后再把高位回填到低位，使 `0x1F` 展开为 `0xFF` 而不是 `0xF8`。
pub fn rgb565_to_rgb(color: u16) -> Rgb<u8> {
    let mut r = ((color >> 11) & 0x1F) << 3;
    let mut g = ((color >> 5) & 0x3F) << 2;
    let mut b = (color & 0x1F) << 3;
    r |= r >> 5;
    g |= g >> 6;
    b |= b >> 5;
    Rgb([r as u8, g as u8, b as u8])
}

/// 透明替换：alpha < 128 且配置了替换色时使用替换色，否则保留原 RGB。
///
/// 返回值不含 alpha，任何输出格式都不携带透明通道。
pub fn resolve_pixel(pixel: Rgba<u8>, transparent_color: Option<Rgb<u8>>) -> Rgb<u8> {
    let Rgba([r, g, b, a]) = pixel;
    match transparent_color {
        Some(color) if a < ALPHA_THRESHOLD => color,
        _ => Rgb([r, g, b]),
    }
}

/// ITU-R 601-2 亮度（定点实现，`+0x8000` 四舍五入）。
pub fn luma(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let weighted = r as u32 * 19_595 + g as u32 * 38_470 + b as u32 * 7_471 + 0x8000;
    (weighted >> 16) as u8
}

/// 将整张图去色为独立的亮度图，再逐像素取值。
pub fn desaturate(image: &RgbaImage, transparent_color: Option<Rgb<u8>>) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(resolve_pixel(*image.get_pixel(x, y), transparent_color))])
    })
}
