//! 日志模块

pub mod setup;
