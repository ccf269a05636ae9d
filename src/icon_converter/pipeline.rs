//! # 解码与重采样流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → RGBA → 六个尺寸帧”的过程集中管理。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 读取 header 尺寸并按像素/内存上限快速拒绝
//! 2. 完整解码，再校验一次实际尺寸
//! 3. 非 RGBA8 图像转换为 RGBA8，已是 RGBA8 的原样透传
//! 4. 每个目标尺寸都从同一张源图独立做 Lanczos3 重采样，不做级联
//! 5. `fast_image_resize` 失败时回退 `image::imageops::resize`

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, RgbaImage};
use std::io::Cursor;

use super::source::{IconVariant, RawImageData};
use super::{IconConverter, IconError};

impl IconConverter {
    /// 将原始字节解码为源图像。
    pub fn decode_source(&self, raw: &RawImageData) -> Result<DynamicImage, IconError> {
        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        self.validate_pixel_limits(header_width, header_height)?;
        self.validate_decoded_memory_limits(header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        self.validate_pixel_limits(width, height)?;
        self.validate_decoded_memory_limits(width, height)?;

        log::info!(
            "✅ 源图片解码成功 - 来源: {} 尺寸: {}x{} 色彩: {:?}",
            raw.origin,
            width,
            height,
            decoded.color()
        );

        Ok(decoded)
    }

    /// 为每个目标尺寸生成一帧。
    ///
    /// 所有帧都来自同一个 `source`，顺序与 `IconConfig::target_sizes` 一致。
    pub fn resample_variants(&self, source: &RgbaImage) -> Result<Vec<IconVariant>, IconError> {
        let (src_width, src_height) = source.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            source.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

        let mut variants = Vec::new();
        for (width, height) in self.config.target_sizes() {
            let image = match Self::resize_with_fast_image_resize(
                &mut resizer,
                &src_image,
                &options,
                width,
                height,
            ) {
                Ok(resized) => resized,
                Err(err) => {
                    log::warn!(
                        "⚠️ fast_image_resize 重采样失败，回退 image::imageops::resize：{}",
                        err
                    );
                    image::imageops::resize(source, width, height, FilterType::Lanczos3)
                }
            };

            log::debug!(
                "🧩 重采样：{}x{} -> {}x{}",
                src_width,
                src_height,
                width,
                height
            );

            variants.push(IconVariant {
                width,
                height,
                image,
            });
        }

        Ok(variants)
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(&self, width: u32, height: u32) -> Result<(), IconError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| IconError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > self.config.max_decoded_bytes {
            return Err(IconError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                self.config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }

    fn resize_with_fast_image_resize(
        resizer: &mut fr::Resizer,
        src_image: &fr::images::Image<'_>,
        options: &fr::ResizeOptions,
        target_width: u32,
        target_height: u32,
    ) -> Result<RgbaImage, IconError> {
        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        resizer
            .resize(src_image, &mut dst_image, Some(options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }
}

/// 色彩模式归一化。
///
/// 已是 RGBA8 时原样返回（不复制、不转换）；其余模式（RGB、灰度、带透明的灰度、
/// 16 位等）一律转换为 RGBA8。第二个返回值表示是否发生了转换。
pub fn normalize_to_rgba(image: DynamicImage) -> (RgbaImage, bool) {
    match image {
        DynamicImage::ImageRgba8(rgba) => (rgba, false),
        other => (other.to_rgba8(), true),
    }
}
