//! # 图标写入模块
//!
//! ## 设计思路
//!
//! 编码与落盘分成两步：先在内存中把全部帧编码成完整的 ICO 字节，再一次性写入目标路径。
//! 编码阶段的任何失败都不会在磁盘上留下文件。
//!
//! ## 实现思路
//!
//! - 每帧以 PNG 压缩的 32 位 RGBA 存储（`IcoFrame::as_png`），目录项记录帧的宽高。
//! - 帧顺序与传入顺序一致，最小尺寸在前。

use std::fs;
use std::path::Path;

use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use super::IconError;
use super::source::IconVariant;

/// 将所有帧编码为 ICO 容器字节。
pub fn encode_icon(variants: &[IconVariant]) -> Result<Vec<u8>, IconError> {
    if variants.is_empty() {
        return Err(IconError::Encode("没有可写入的图标帧".to_string()));
    }

    let frames = variants
        .iter()
        .map(|variant| {
            if variant.image.dimensions() != (variant.width, variant.height) {
                return Err(IconError::Encode(format!(
                    "帧尺寸与像素数据不一致：标注 {}x{}，实际 {}x{}",
                    variant.width,
                    variant.height,
                    variant.image.width(),
                    variant.image.height()
                )));
            }

            IcoFrame::as_png(
                variant.image.as_raw(),
                variant.width,
                variant.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| {
                IconError::Encode(format!(
                    "{}x{} 帧编码失败：{}",
                    variant.width, variant.height, e
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&frames)
        .map_err(|e| IconError::Encode(format!("ICO 容器编码失败：{}", e)))?;

    log::debug!("📦 ICO 编码完成 - 帧数: {} 字节: {}", frames.len(), bytes.len());

    Ok(bytes)
}

/// 将编码好的图标写入目标路径。
pub fn write_icon(path: &Path, bytes: &[u8]) -> Result<(), IconError> {
    fs::write(path, bytes).map_err(|e| {
        IconError::FileSystem(format!("无法写入图标文件 {}：{}", path.display(), e))
    })?;

    log::info!("💾 图标已写入 - 路径: {} 字节: {}", path.display(), bytes.len());
    Ok(())
}
