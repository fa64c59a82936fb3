//! # 数组序列化模块
//!
//! ## 设计思路
//!
//! 输出文本需要逐字节稳定（下游可能直接 diff 生成的头文件），
//! 因此布局集中在此处，按固定模板拼接，不依赖任何模板引擎。
//!
//! ## 实现思路
//!
//! 1. 编码值渲染为定宽十六进制字面量
//! 2. 按格式分行（12 个/行，RGB888 为 15 个/行），除最后一行外行尾加逗号
//! 3. 拼接包含保护宏、注释块、尺寸宏与数组声明的完整头文件

use std::path::Path;

use super::{ConversionResult, EncodedData};

/// 变量名无法从任何来源推导时使用的兜底名称。
pub const FALLBACK_IDENTIFIER: &str = "image";

const INDENT: &str = "    ";

/// 清洗标识符：非字母数字/下划线替换为 `_`，数字开头时前置 `_`。
pub fn sanitize_identifier(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    match name.chars().next() {
        None => FALLBACK_IDENTIFIER.to_string(),
        Some(first) if first.is_numeric() => {
            name.insert(0, '_');
            name
        }
        Some(_) => name,
    }
}

/// 由文件名（去扩展名）推导标识符。
pub fn identifier_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_identifier(&stem)
}

/// 显式变量名优先，否则由路径推导；两者都会经过清洗。
pub fn resolve_identifier(explicit: Option<&str>, path: &Path) -> String {
    match explicit {
        Some(name) => sanitize_identifier(name),
        None => identifier_from_path(path),
    }
}

/// 将编码值分行，每行以四空格缩进。
pub fn format_array_lines(data: &EncodedData, values_per_line: usize) -> Vec<String> {
    let literals = data.hex_literals();
    let per_line = values_per_line.max(1);
    let line_count = literals.len().div_ceil(per_line);

    literals
        .chunks(per_line)
        .enumerate()
        .map(|(index, chunk)| {
            let mut line = format!("{}{}", INDENT, chunk.join(", "));
            if index + 1 < line_count {
                line.push(',');
            }
            line
        })
        .collect()
}

/// 渲染完整头文件文本。
///
/// `file_name` 仅用于注释行；`var_name` 应已清洗。
pub fn render_header(result: &ConversionResult, var_name: &str, file_name: &str) -> String {
    let guard = format!("{}_H", var_name.to_uppercase());
    let width = result.format.element_width();

    let mut lines = vec![
        format!("#ifndef {}", guard),
        format!("#define {}", guard),
        String::new(),
        "#include <stdint.h>".to_string(),
        String::new(),
        format!("// Image: {}", file_name),
        format!("// Size: {}x{} pixels", result.width, result.height),
        format!("// Format: {}", result.format.display_name()),
        format!("// Total bytes: {}", result.byte_count()),
        String::new(),
        format!("#define {}_width {}", var_name, result.width),
        format!("#define {}_height {}", var_name, result.height),
        String::new(),
        format!("static const {} {}[] PROGMEM = {{", width.c_type(), var_name),
    ];

    lines.extend(format_array_lines(&result.data, result.format.values_per_line()));

    lines.extend([
        "};".to_string(),
        String::new(),
        format!("#endif // {}", guard),
        String::new(),
    ]);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::OutputFormat;

    #[test]
    fn sanitizes_identifiers_from_file_names() {
        assert_eq!(identifier_from_path(Path::new("3d-logo.png")), "_3d_logo");
        assert_eq!(identifier_from_path(Path::new("assets/Icon Set!.png")), "Icon_Set_");
        assert_eq!(identifier_from_path(Path::new("splash_screen.bmp")), "splash_screen");
    }

    #[test]
    fn explicit_names_are_sanitized_too() {
        assert_eq!(resolve_identifier(Some("my-logo"), Path::new("x.png")), "my_logo");
        assert_eq!(resolve_identifier(None, Path::new("x.png")), "x");
    }

    #[test]
    fn empty_identifier_falls_back() {
        assert_eq!(sanitize_identifier(""), FALLBACK_IDENTIFIER);
    }

    #[test]
    fn wraps_values_with_trailing_commas() {
        let data = EncodedData::Words((0..25).collect());
        let lines = format_array_lines(&data, 12);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("0x000B,"));
        assert!(lines[1].ends_with("0x0017,"));
        assert_eq!(lines[2], "    0x0018");
    }

    #[test]
    fn exact_multiple_has_no_trailing_comma_on_last_line() {
        let data = EncodedData::Bytes(vec![0xAB; 30]);
        let lines = format_array_lines(&data, 15);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(','));
        assert!(!lines[1].ends_with(','));
        assert_eq!(lines[1].matches("0xAB").count(), 15);
    }

    #[test]
    fn renders_exact_header_layout() {
        let result = ConversionResult {
            format: OutputFormat::Rgb565Swapped,
            width: 2,
            height: 1,
            data: EncodedData::Words(vec![0x00F8, 0x0000]),
        };

        let text = render_header(&result, "_3d_logo", "3d-logo.png");
        let expected = "\
#ifndef _3D_LOGO_H
#define _3D_LOGO_H

#include <stdint.h>

// Image: 3d-logo.png
// Size: 2x1 pixels
// Format: RGB565_SWAPPED
// Total bytes: 4

#define _3d_logo_width 2
#define _3d_logo_height 1

static const uint16_t _3d_logo[] PROGMEM = {
    0x00F8, 0x0000
};

#endif // _3D_LOGO_H
";
        assert_eq!(text, expected);
    }
}
