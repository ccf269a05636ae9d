//! # 数据源与中间模型
//!
//! - `RawImageData` 表示已读取但未解码的字节
//! - `IconVariant` 表示某个目标尺寸下的 RGBA 帧
//! - `ConversionReport` 表示一次成功转换的结果摘要

use std::path::PathBuf;

use image::RgbaImage;

/// 加载阶段输出：原始字节与来源标识。
pub struct RawImageData {
    /// 原始图片字节。
    pub bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub origin: String,
}

/// 重采样阶段输出：单个尺寸的图标帧。
pub struct IconVariant {
    pub width: u32,
    pub height: u32,
    /// RGBA 像素（`width * height * 4` 字节）。
    pub image: RgbaImage,
}

/// 转换结果摘要。
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// 源图片解码后的尺寸。
    pub source_dimensions: (u32, u32),
    /// 源图片是否经过 RGBA 转换。
    pub color_converted: bool,
    /// 写入图标的帧尺寸，按写入顺序。
    pub frame_sizes: Vec<(u32, u32)>,
    /// 输出文件字节数。
    pub bytes_written: usize,
}

impl ConversionReport {
    /// 成功提示，写到标准输出的唯一一行。
    pub fn success_message(&self) -> String {
        format!(
            "Successfully converted {} to {} with multiple sizes",
            self.input_path.display(),
            self.output_path.display()
        )
    }
}
