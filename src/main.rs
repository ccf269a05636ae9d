//! # icon-forge — 程序入口
//!
//! 无命令行参数：固定把当前目录下的 `icon.png` 转换为 `icon.ico`。
//! 日志写到 stderr，stdout 只输出一行成功提示。

use std::process::ExitCode;

use icon_forge::icon_converter::{IconConfig, IconConverter};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let converter = IconConverter::new(IconConfig::default());
    match converter.convert() {
        Ok(report) => {
            println!("{}", report.success_message());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("❌ 图标转换失败：{err}");
            ExitCode::FAILURE
        }
    }
}
