//! # icon-forge — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! icon.png
//!    ↓ loader      读取 + 体积/签名校验
//!    ↓ pipeline    解码 + 像素限制 + RGBA 归一化
//!    ↓ pipeline    16/32/48/64/128/256 Lanczos3 独立重采样
//!    ↓ writer      ICO 编码（内存）→ 一次性写盘
//! icon.ico
//! ```
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`icon_converter`] | 单次 PNG → 多尺寸 ICO 转换，错误类型 `IconError` |

pub mod icon_converter;
