//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在解码之前尽早拒绝明显不可用的输入：文件不存在、体积超限、内容不是图片。
//!
//! ## 实现思路
//!
//! - 存在性 + metadata 体积限制 + 一次性读取。
//! - 文件签名先交给 `infer` 判断；`infer` 不认识的格式再交给 `image::guess_format`，
//!   避免误伤 `image` 能解码但没有魔数表的格式。

use std::fs;
use std::path::Path;

use super::source::RawImageData;
use super::{IconConverter, IconError};

impl IconConverter {
    /// 从本地路径加载源图片原始字节。
    pub fn load_source(&self, path: &Path) -> Result<RawImageData, IconError> {
        log::info!("📁 开始读取源图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        let metadata = fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(IconError::FileSystem(format!(
                "路径不是普通文件：{}",
                path.display()
            )));
        }

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = fs::read(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            origin: path.display().to_string(),
        })
    }

    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("图片内容为空".to_string()));
        }

        match infer::get(bytes) {
            Some(kind) if kind.matcher_type() == infer::MatcherType::Image => Ok(()),
            Some(kind) => Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            ))),
            None => image::guess_format(bytes)
                .map(|_| ())
                .map_err(|e| IconError::InvalidFormat(format!("无法识别图片类型：{}", e))),
        }
    }
}
