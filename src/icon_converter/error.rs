//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 整条转换链路只有一个错误枚举，所有失败都是致命的，不做重试与恢复。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧（测试、库使用者）可按分支匹配失败类别。

/// 图标转换统一错误类型。
///
/// 二进制入口只打印 `Display` 并以非零状态退出。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
