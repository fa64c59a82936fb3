//! # 加载模块
//!
//! ## 设计思路
//!
//! 在解码前完成所有廉价校验：文件存在性、体积上限、文件签名。
//! 签名通过 `infer` 读取魔数判断，避免把任意文件交给解码器。
//!
//! ## 实现思路
//!
//! `infer` 没有覆盖全部图片格式（PNM、TGA、QOI、farbfeld 等），且 TGA 没有魔数。
//! 因此确定解码格式的顺序为：
//! 1. `infer` 识别为非图片类型 → 直接拒绝
//! 2. `image::guess_format` 按魔数识别
//! 3. 按扩展名 `ImageFormat::from_path` 识别
//! 4. 以上都失败 → `InvalidFormat`

use std::path::Path;

use image::ImageFormat;

use super::source::RawImageData;
use super::{ConvertError, Converter, ConverterConfig};

impl Converter {
    /// 读取本地图片文件的原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &Path,
        config: &ConverterConfig,
    ) -> Result<RawImageData, ConvertError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(ConvertError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| ConvertError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(ConvertError::FileSystem(format!(
                "路径不是文件：{}",
                path.display()
            )));
        }

        if metadata.len() > config.max_file_size {
            return Err(ConvertError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ConvertError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        let format = Self::resolve_image_format(&bytes, path)?;

        Ok(RawImageData {
            bytes,
            path: path.to_path_buf(),
            format,
        })
    }

    /// 校验文件签名并确定解码格式。
    fn resolve_image_format(bytes: &[u8], path: &Path) -> Result<ImageFormat, ConvertError> {
        if bytes.is_empty() {
            return Err(ConvertError::InvalidFormat("图片内容为空".to_string()));
        }

        if let Some(kind) = infer::get(bytes) {
            if kind.matcher_type() != infer::MatcherType::Image {
                return Err(ConvertError::InvalidFormat(format!(
                    "文件签名不是图片类型：{}",
                    kind.mime_type()
                )));
            }
        }

        image::guess_format(bytes)
            .or_else(|_| ImageFormat::from_path(path))
            .map_err(|_| {
                ConvertError::InvalidFormat(format!(
                    "无法识别图片类型：{}",
                    path.display()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("image-header-loader-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn rejects_missing_file() {
        let converter = Converter::default();
        let result = converter.load_from_file(
            Path::new("/definitely/not/here.png"),
            &ConverterConfig::default(),
        );
        assert!(matches!(result, Err(ConvertError::FileSystem(_))));
    }

    #[test]
    fn rejects_unknown_signature_and_extension() {
        let dir = unique_temp_dir();
        let path = dir.join("notes.txt");
        std::fs::write(&path, b"just some text, not pixels").expect("write file");

        let result = Converter::default().load_from_file(&path, &ConverterConfig::default());
        assert!(matches!(result, Err(ConvertError::InvalidFormat(_))));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_non_image_signature_even_with_image_extension() {
        let dir = unique_temp_dir();
        let path = dir.join("archive.png");
        std::fs::write(&path, b"PK\x03\x04\x14\x00\x00\x00\x08\x00").expect("write file");

        let result = Converter::default().load_from_file(&path, &ConverterConfig::default());
        assert!(matches!(result, Err(ConvertError::InvalidFormat(_))));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn falls_back_to_extension_for_formats_without_magic() {
        let dir = unique_temp_dir();
        let path = dir.join("sprite.tga");
        std::fs::write(&path, [0u8, 0, 2, 0, 0, 0, 0, 0]).expect("write file");

        let raw = Converter::default()
            .load_from_file(&path, &ConverterConfig::default())
            .expect("load by extension");
        assert_eq!(raw.format, ImageFormat::Tga);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn prefers_magic_bytes_over_extension() {
        let dir = unique_temp_dir();
        let path = dir.join("actually_png.tga");
        let image = image::RgbaImage::new(1, 1);
        image.save_with_format(&path, ImageFormat::Png).expect("save png");

        let raw = Converter::default()
            .load_from_file(&path, &ConverterConfig::default())
            .expect("load png");
        assert_eq!(raw.format, ImageFormat::Png);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_empty_file() {
        let dir = unique_temp_dir();
        let path = dir.join("empty.png");
        std::fs::write(&path, b"").expect("write file");

        let result = Converter::default().load_from_file(&path, &ConverterConfig::default());
        assert!(matches!(result, Err(ConvertError::InvalidFormat(_))));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = unique_temp_dir();
        let path = dir.join("big.png");
        std::fs::write(&path, vec![0u8; 64]).expect("write file");

        let config = ConverterConfig {
            max_file_size: 16,
            ..ConverterConfig::default()
        };
        let result = Converter::default().load_from_file(&path, &config);
        assert!(matches!(result, Err(ConvertError::ResourceLimit(_))));

        let _ = std::fs::remove_dir_all(dir);
    }
}
