//! 统一错误类型定义.
//!
//! 所有 Tao crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// Tao 框架统一错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaoError {
    /// 无效参数 (调用方提供的缓冲区或参数不一致)
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的操作
    #[error("不支持的操作: {0}")]
    Unsupported(String),

    /// 无效数据 (损坏的码流, 非法 VLC 码字等)
    #[error("无效数据: {0}")]
    InvalidData(String),

    /// 已到达流末尾
    #[error("已到达流末尾")]
    Eof,

    /// 内部错误 (不应发生)
    #[error("内部错误: {0}")]
    Internal(String),
}

impl TaoError {
    /// 是否为码流层面的错误 (码流耗尽或码字非法)
    ///
    /// 宏块层据此决定是否放弃当前块并进入错误隐藏.
    pub fn is_bitstream_error(&self) -> bool {
        matches!(self, TaoError::Eof | TaoError::InvalidData(_))
    }
}

/// Tao 框架统一 Result 类型
pub type TaoResult<T> = Result<T, TaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitstream_error_classification() {
        assert!(TaoError::Eof.is_bitstream_error());
        assert!(TaoError::InvalidData("bad vlc".into()).is_bitstream_error());
        assert!(!TaoError::InvalidArgument("stride".into()).is_bitstream_error());
    }

    #[test]
    fn test_error_display() {
        let err = TaoError::InvalidData("TTBLK 码字非法".into());
        assert_eq!(err.to_string(), "无效数据: TTBLK 码字非法");
        assert_eq!(TaoError::Eof.to_string(), "已到达流末尾");
    }
}
