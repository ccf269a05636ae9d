//! # 图标转换模块（icon_converter）
//!
//! ## 设计思路
//!
//! 将“读取源文件 → 解码归一化 → 多尺寸重采样 → ICO 编码落盘”按职责拆分为多个子模块。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责文件读取与输入校验
//! - `pipeline`：负责解码、像素限制、RGBA 归一化与重采样
//! - `writer`：负责 ICO 编码与写文件
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 + 体积 + 文件签名）
//!    ├─ pipeline.rs（解码 + 像素限制 + RGBA + Lanczos3）
//!    └─ writer.rs（ICO 编码 + 写文件）
//!    ↓
//! ConversionReport / IconError
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, ICON_SIZES, IconConfig};
pub use error::IconError;
pub use handler::IconConverter;
pub use pipeline::normalize_to_rgba;
pub use source::{ConversionReport, IconVariant, RawImageData};
pub use writer::{encode_icon, write_icon};

#[cfg(test)]
pub(crate) mod test_support {
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba, RgbaImage};
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub(crate) fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let seq = TEMP_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "icon-forge-test-{}-{nanos}-{seq}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    /// 带半透明区域的渐变图，便于观察 alpha 是否被保留。
    pub(crate) fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let r = (x % 255) as u8;
            let g = (y % 255) as u8;
            let b = ((x + y) % 255) as u8;
            let a = if (x + y) % 2 == 0 { 255 } else { 128 };
            Rgba([r, g, b, a])
        })
    }

    pub(crate) fn create_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(gradient_rgba(width, height))
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    pub(crate) fn create_rgb_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 255) as u8, (y % 255) as u8, ((x * y) % 255) as u8])
        });
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }
}
