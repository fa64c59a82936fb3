//! # 图片转头文件工具 — 命令行入口
//!
//! 本文件仅负责参数解析、设置合并与结果输出。
//! 转换逻辑见 `converter` 模块，详见 `lib.rs` 架构文档。

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use image_header_converter::converter::{
    ConversionRequest, Converter, OutputFormat, RenderedHeader, TransparentColor,
};
use image_header_converter::error::AppError;
use image_header_converter::settings::{self, Settings};

#[derive(Parser)]
#[command(
    name = "image-header-converter",
    version,
    about = "Convert an image into a C/C++ header array (RGB565 / RGB888 / grayscale)"
)]
struct Args {
    /// Source image (PNG, JPEG, BMP, GIF, ...)
    input: PathBuf,

    /// Output header path (default: <name>.h next to the input or in output_dir)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Array identifier (default: derived from the input file name)
    #[arg(short = 'n', long = "name")]
    var_name: Option<String>,

    /// cardputer | rgb565 | rgb565_swapped | rgb888 | grayscale
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Replace pixels with alpha < 128: none | black | white | magenta
    #[arg(short, long)]
    transparent: Option<String>,

    /// Also write an RGB565 round-trip preview PNG
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Longest side of the preview in pixels (nearest-neighbour downscale)
    #[arg(long)]
    preview_size: Option<u32>,

    /// JSON settings file with default options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the header to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        log::error!("转换失败 [{}]: {err}", err.code());
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let settings = match args.config.as_deref() {
        Some(path) => settings::load_settings_from_path(path),
        None => Settings::default(),
    };

    let request = build_request(&args, &settings)?;

    let mut config = settings.converter_config();
    if args.preview_size.is_some() {
        config.preview_max_dimension = args.preview_size;
    }
    let converter = Converter::new(config);

    let loaded = converter.load_image(&args.input)?;
    let header = converter.render_loaded(&loaded, &request);

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(header.text.as_bytes())?;
        stdout.flush()?;
        eprintln!("{}", summary(&header, None));
    } else {
        let output = match args.output.clone() {
            Some(path) => path,
            None => default_output_path(&args.input, settings.output_dir(), &header.var_name),
        };
        converter.write_header(&header, &output)?;
        println!("{}", summary(&header, Some(&output)));
    }

    if let Some(preview_path) = args.preview.as_deref() {
        converter.write_preview(&loaded, &request, preview_path)?;
    }

    Ok(())
}

/// 合并设置文件与命令行参数，命令行优先。
fn build_request(args: &Args, settings: &Settings) -> Result<ConversionRequest, AppError> {
    let format = match args.format {
        Some(format) => format,
        None => settings.output_format()?.unwrap_or_default(),
    };

    let transparent = match args.transparent.as_deref() {
        Some(value) => TransparentColor::parse_option(value)?,
        None => settings.transparent()?.flatten(),
    };

    let mut request = ConversionRequest::new(format).with_transparent_color(transparent);
    if let Some(name) = args.var_name.as_deref() {
        request = request.with_var_name(name);
    }
    Ok(request)
}

fn default_output_path(input: &Path, output_dir: Option<PathBuf>, var_name: &str) -> PathBuf {
    let dir = output_dir
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{var_name}.h"))
}

fn summary(header: &RenderedHeader, output: Option<&Path>) -> String {
    let result = &header.result;
    let mut text = format!(
        "Image: {}x{} pixels | Format: {} | Array elements: {} | Data size: {} bytes",
        result.width,
        result.height,
        result.format.display_name(),
        result.element_count(),
        result.byte_count()
    );
    if let Some(path) = output {
        text.push_str(&format!("\nSaved to: {}", path.display()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv.iter().copied()).expect("parse args")
    }

    #[test]
    fn cli_overrides_settings() {
        let args = parse(&["bin", "logo.png", "-f", "rgb565", "-t", "none", "-n", "boot"]);
        let settings = Settings {
            format: Some("grayscale".to_string()),
            transparent_color: Some("white".to_string()),
            ..Settings::default()
        };

        let request = build_request(&args, &settings).expect("build request");
        assert_eq!(request.format, OutputFormat::Rgb565);
        assert_eq!(request.transparent_color, None);
        assert_eq!(request.var_name.as_deref(), Some("boot"));
    }

    #[test]
    fn settings_fill_missing_flags() {
        let args = parse(&["bin", "logo.png"]);
        let settings = Settings {
            transparent_color: Some("magenta".to_string()),
            ..Settings::default()
        };

        let request = build_request(&args, &settings).expect("build request");
        assert_eq!(request.format, OutputFormat::Cardputer);
        assert_eq!(request.transparent_color, Some(image::Rgb([255, 0, 255])));
    }

    #[test]
    fn rejects_unknown_format_flag() {
        assert!(Args::try_parse_from(["bin", "logo.png", "-f", "rgb332"]).is_err());
    }

    #[test]
    fn stdout_conflicts_with_output() {
        assert!(Args::try_parse_from(["bin", "logo.png", "--stdout", "-o", "x.h"]).is_err());
    }

    #[test]
    fn default_output_uses_input_directory() {
        let path = default_output_path(Path::new("assets/3d-logo.png"), None, "_3d_logo");
        assert_eq!(path, PathBuf::from("assets/_3d_logo.h"));

        let path = default_output_path(Path::new("logo.png"), Some(PathBuf::from("include")), "logo");
        assert_eq!(path, PathBuf::from("include/logo.h"));
    }

    fn unique_temp_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("image-header-cli-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn seed_png(dir: &Path) -> PathBuf {
        let path = dir.join("logo.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([13, 130, 250, 255]))
            .save(&path)
            .expect("save png");
        path
    }

    #[test]
    fn writes_header_and_preview() {
        let dir = unique_temp_dir();
        let input = seed_png(&dir);
        let header = dir.join("out.h");
        let preview = dir.join("preview.png");

        let args = parse(&[
            "bin",
            input.to_str().expect("utf-8 path"),
            "-o",
            header.to_str().expect("utf-8 path"),
            "--preview",
            preview.to_str().expect("utf-8 path"),
        ]);
        run(args).expect("run");

        let text = std::fs::read_to_string(&header).expect("read header");
        assert!(text.contains("static const uint16_t logo[] PROGMEM = {"));
        let saved = image::open(&preview).expect("open preview").to_rgb8();
        assert_eq!(saved.dimensions(), (2, 2));
        assert_eq!(saved.get_pixel(0, 0).0, [8, 130, 255]);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn preview_is_skipped_when_header_write_fails() {
        let dir = unique_temp_dir();
        let input = seed_png(&dir);
        let header = dir.join("missing-dir").join("out.h");
        let preview = dir.join("preview.png");

        let args = parse(&[
            "bin",
            input.to_str().expect("utf-8 path"),
            "-o",
            header.to_str().expect("utf-8 path"),
            "--preview",
            preview.to_str().expect("utf-8 path"),
        ]);
        let result = run(args);

        assert!(matches!(result, Err(AppError::Convert(_))));
        assert!(!header.exists());
        assert!(!preview.exists());

        let _ = std::fs::remove_dir_all(dir);
    }
}
