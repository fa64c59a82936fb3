//! # 图片转头文件工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  命令行 (main.rs, clap)                   │
//! │        参数解析 ── 设置文件合并 ── 输出/摘要              │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<T, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓            库 (Rust)                              │
//! │                                                          │
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  ├─ settings ─── JSON 默认设置                            │
//! │  │                                                       │
//! │  └─ converter ── 加载·解码·编码·序列化                     │
//! │      ├─ codec       RGB565 / 字节交换 / 亮度              │
//! │      ├─ serializer  头文件文本 + 标识符清洗               │
//! │      └─ preview     RGB565 往返预览                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，命令行入口的返回类型 |
//! | [`settings`] | 读取 JSON 默认设置，解析格式与替换色 |
//! | [`converter`] | 将图片转换为 C/C++ 头文件数组 |

pub mod error;
pub mod converter;
pub mod settings;
