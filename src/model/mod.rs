//! 应用级配置与命令行参数

pub mod arg;
pub mod config;
