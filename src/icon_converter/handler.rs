//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconConverter` 只负责流程编排，处理链路固定为：
//! 1. 加载源文件字节
//! 2. 解码并归一化为 RGBA
//! 3. 六个尺寸独立重采样
//! 4. 内存中编码 ICO，再一次性写入磁盘
//!
//! 任一阶段失败立即返回，不重试、不清理。
//! 记录 `load/decode/resample/encode/total` 阶段耗时，便于性能诊断。

use std::time::Instant;

use image::GenericImageView;

use super::pipeline::normalize_to_rgba;
use super::source::ConversionReport;
use super::writer::{encode_icon, write_icon};
use super::{IconConfig, IconError};

/// 图标转换器。
pub struct IconConverter {
    pub(super) config: IconConfig,
}

impl IconConverter {
    /// # 示例
    /// ```rust,ignore
    /// use icon_forge::icon_converter::{IconConfig, IconConverter};
    ///
    /// let report = IconConverter::new(IconConfig::default()).convert()?;
    /// println!("{}", report.success_message());
    /// # Ok::<(), icon_forge::icon_converter::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// 处理主入口：读取源图片并写出多尺寸图标。
    pub fn convert(&self) -> Result<ConversionReport, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let raw = self.load_source(&self.config.input_path)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let decoded = self.decode_source(&raw)?;
        drop(raw);
        let source_dimensions = decoded.dimensions();
        let (source, color_converted) = normalize_to_rgba(decoded);
        if color_converted {
            log::info!("🎨 源图片不是 RGBA，已转换为 RGBA");
        }
        let decode_elapsed = decode_start.elapsed();

        let resample_start = Instant::now();
        let variants = self.resample_variants(&source)?;
        let resample_elapsed = resample_start.elapsed();

        let encode_start = Instant::now();
        let bytes = encode_icon(&variants)?;
        write_icon(&self.config.output_path, &bytes)?;
        let encode_elapsed = encode_start.elapsed();

        log::info!(
            "✅ 图标转换完成 - load={}ms decode={}ms resample={}ms encode={}ms total={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            resample_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(ConversionReport {
            input_path: self.config.input_path.clone(),
            output_path: self.config.output_path.clone(),
            source_dimensions,
            color_converted,
            frame_sizes: variants.iter().map(|v| (v.width, v.height)).collect(),
            bytes_written: bytes.len(),
        })
    }
}
