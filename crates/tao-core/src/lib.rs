//! # tao-core
//!
//! Tao 多媒体框架核心库, 提供基础类型定义、错误处理和位流读取.
//!
//! 本 crate 对标 FFmpeg 的 libavutil, 为整个 Tao 框架提供底层基础设施.

pub mod bitreader;
pub mod error;

// 重导出常用类型
pub use bitreader::BitReader;
pub use error::{TaoError, TaoResult};
