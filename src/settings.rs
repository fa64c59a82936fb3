//! 默认设置文件
//!
//! # 设计思路
//!
//! 允许用 JSON 文件为整个项目固定一组默认参数（格式、替换色、输出目录、资源上限），
//! 命令行参数逐项覆盖文件中的取值。
//!
//! # 实现思路
//!
//! - 所有字段均可缺省（`#[serde(default)]`）。
//! - 文件不存在或解析失败时回退到默认设置并输出警告，不中断转换。
//! - 字符串字段在使用时才解析为枚举，错误走统一的 `ConvertError::InvalidOption`。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::converter::{ConvertError, ConverterConfig, OutputFormat, TransparentColor};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub transparent_color: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub max_file_size: Option<u64>,
    #[serde(default)]
    pub max_decoded_pixels: Option<u64>,
    #[serde(default)]
    pub preview_max_dimension: Option<u32>,
}

/// 从指定路径加载设置；失败时回退默认值。
pub fn load_settings_from_path(path: &Path) -> Settings {
    if !path.exists() {
        log::warn!("设置文件不存在，使用默认设置: {}", path.display());
        return Settings::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("读取设置文件失败，使用默认设置: {err}");
            return Settings::default();
        }
    };

    match serde_json::from_str::<Settings>(&content) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("解析设置文件失败，使用默认设置: {err}");
            Settings::default()
        }
    }
}

impl Settings {
    pub fn output_format(&self) -> Result<Option<OutputFormat>, ConvertError> {
        self.format.as_deref().map(str::parse).transpose()
    }

    /// 外层 `None` 表示未设置；内层 `None` 表示显式关闭替换（`"none"`）。
    pub fn transparent(&self) -> Result<Option<Option<TransparentColor>>, ConvertError> {
        self.transparent_color
            .as_deref()
            .map(TransparentColor::parse_option)
            .transpose()
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }

    /// 在默认资源上限上叠加文件中的取值。
    pub fn converter_config(&self) -> ConverterConfig {
        let mut config = ConverterConfig::default();
        if let Some(max_file_size) = self.max_file_size {
            config.max_file_size = max_file_size;
        }
        if let Some(max_decoded_pixels) = self.max_decoded_pixels {
            config.max_decoded_pixels = max_decoded_pixels;
        }
        if self.preview_max_dimension.is_some() {
            config.preview_max_dimension = self.preview_max_dimension;
        }
        config
    }
}
