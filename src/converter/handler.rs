//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Converter` 只负责流程编排与配置持有，不直接与命令行绑定。
//! 处理链路固定为：
//! 1. 读取并校验源文件
//! 2. 解码为 RGBA
//! 3. 按请求编码像素
//! 4. 渲染头文件文本
//!
//! ## 实现思路
//!
//! - 任一阶段失败即整体失败，不产生部分输出。
//! - 记录 `load/convert/render/total` 阶段耗时，便于性能诊断。
//! - 加载与渲染单独暴露，供需要像素数据的调用方（预览）使用。
//! - 落盘与渲染分离：写文件失败不影响内存中的结果，调用方可重试。

use std::path::{Path, PathBuf};
use std::time::Instant;

use super::pipeline::convert;
use super::preview::{fit_preview, render_rgb565_preview, save_preview};
use super::serializer::{render_header, resolve_identifier};
use super::source::LoadedImage;
use super::{ConversionRequest, ConvertError, ConverterConfig, RenderedHeader};

/// 图片转换器。
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub(super) config: ConverterConfig,
}

impl Converter {
    /// # 示例
    /// ```rust,ignore
    /// use image_header_converter::converter::{ConversionRequest, Converter, ConverterConfig};
    ///
    /// let converter = Converter::new(ConverterConfig::default());
    /// let header = converter.convert_file("logo.png", &ConversionRequest::default())?;
    /// # Ok::<(), image_header_converter::converter::ConvertError>(())
    /// ```
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// 读取并解码图片文件。
    pub fn load_image(&self, path: impl AsRef<Path>) -> Result<LoadedImage, ConvertError> {
        let load_start = Instant::now();
        let raw = self.load_from_file(path.as_ref(), &self.config)?;
        let loaded = self.decode_to_rgba(raw, &self.config)?;

        log::info!("⏱️ 加载完成 - load={}ms", load_start.elapsed().as_millis());
        Ok(loaded)
    }

    /// 对已加载图片执行编码与渲染。
    pub fn render_loaded(&self, loaded: &LoadedImage, request: &ConversionRequest) -> RenderedHeader {
        let convert_start = Instant::now();
        let result = convert(&loaded.image, request);
        let convert_elapsed = convert_start.elapsed();

        let render_start = Instant::now();
        let var_name = resolve_identifier(request.explicit_var_name(), &loaded.path);
        let text = render_header(&result, &var_name, &loaded.file_name);
        let render_elapsed = render_start.elapsed();

        log::info!(
            "✅ 图片转换完成 - 变量: {} 格式: {} 元素: {} convert={}ms render={}ms",
            var_name,
            result.format.display_name(),
            result.element_count(),
            convert_elapsed.as_millis(),
            render_elapsed.as_millis()
        );

        RenderedHeader {
            var_name,
            text,
            result,
        }
    }

    /// 处理主入口：文件 → 头文件文本。
    pub fn convert_file(
        &self,
        path: impl AsRef<Path>,
        request: &ConversionRequest,
    ) -> Result<RenderedHeader, ConvertError> {
        let total_start = Instant::now();
        let loaded = self.load_image(path)?;
        let header = self.render_loaded(&loaded, request);

        log::info!("⏱️ 处理总耗时 - total={}ms", total_start.elapsed().as_millis());
        Ok(header)
    }

    /// 将头文件写入磁盘。
    ///
    /// 先写同目录临时文件再重命名，失败时不会留下半截文件。
    pub fn write_header(&self, header: &RenderedHeader, path: impl AsRef<Path>) -> Result<(), ConvertError> {
        let path = path.as_ref();
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, header.text.as_bytes())
            .map_err(|e| ConvertError::FileSystem(format!("写入头文件失败：{}", e)))?;

        if let Err(e) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(ConvertError::FileSystem(format!("写入头文件失败：{}", e)));
        }

        log::info!(
            "💾 头文件已保存 - 路径: {} 大小: {} 字节",
            path.display(),
            header.text.len()
        );
        Ok(())
    }

    /// 生成 RGB565 往返预览并保存为 PNG。
    ///
    /// 按配置的 `preview_max_dimension` 等比缩小，返回实际写入的尺寸。
    pub fn write_preview(
        &self,
        loaded: &LoadedImage,
        request: &ConversionRequest,
        path: impl AsRef<Path>,
    ) -> Result<(u32, u32), ConvertError> {
        let mut preview = render_rgb565_preview(&loaded.image, request.transparent_color);
        if let Some(max_dimension) = self.config.preview_max_dimension {
            preview = fit_preview(preview, max_dimension);
        }

        save_preview(&preview, path.as_ref())?;
        Ok(preview.dimensions())
    }
}
