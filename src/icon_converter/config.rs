//! # 配置模块
//!
//! ## 设计思路
//!
//! 输入/输出路径与输入防护阈值集中在 `IconConfig`，尺寸表是固定常量，不开放配置。
//!
//! ## 实现思路
//!
//! - `Default` 即程序实际运行的配置：`icon.png` → `icon.ico`。
//! - `with_paths` 仅替换路径，阈值保持默认，供测试与库调用方使用。

use std::path::PathBuf;

/// 图标内嵌的六个方形尺寸，按升序排列。
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub const DEFAULT_INPUT_PATH: &str = "icon.png";
pub const DEFAULT_OUTPUT_PATH: &str = "icon.ico";

/// 图标转换配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 源图片路径（相对当前工作目录）。
    pub input_path: PathBuf,
    /// 输出图标路径（相对当前工作目录）。
    pub output_path: PathBuf,
    /// 读取源文件时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}

impl IconConfig {
    /// 使用自定义路径构建配置，其余参数保持默认。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_forge::icon_converter::IconConfig;
    ///
    /// let config = IconConfig::with_paths("assets/logo.png", "assets/logo.ico");
    /// assert_eq!(config.max_file_size, IconConfig::default().max_file_size);
    /// ```
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            ..Self::default()
        }
    }

    /// 目标帧尺寸 `(width, height)`，顺序与 `ICON_SIZES` 一致。
    pub fn target_sizes(&self) -> impl Iterator<Item = (u32, u32)> {
        ICON_SIZES.iter().map(|&size| (size, size))
    }
}
