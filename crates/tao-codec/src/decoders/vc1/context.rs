//! 图像级块解码上下文

use super::types::{CodingSet, FrameCodingMode};
use super::vlc::tt_index_for_pquant;

/// 帧间块解码的图像级参数
///
/// 每幅图像构造一次, 以引用传给各块解码调用.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterBlockContext {
    /// 帧编码模式, 决定扫描表制式
    pub fcm: FrameCodingMode,
    /// AC 系数表族 (宏块内所有块相同)
    pub coding_set: CodingSet,
    /// TTBLK/SUBBLKPAT 码表索引 (0..3)
    pub tt_index: usize,
    /// 变换类型在帧级给出 (TTMBF)
    pub ttmbf: bool,
    /// 范围缩减模式标志
    pub res_rtm_flag: bool,
    /// 图像级半步量化
    pub halfpq: bool,
    /// 非均匀量化器 (不加反量化偏置)
    pub pquantizer: bool,
}

impl InterBlockContext {
    /// 以图像量化参数 PQUANT 推导码表索引
    pub fn for_pquant(pquant: u8) -> Self {
        Self {
            tt_index: tt_index_for_pquant(pquant),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_pquant() {
        assert_eq!(InterBlockContext::for_pquant(3).tt_index, 0);
        assert_eq!(InterBlockContext::for_pquant(8).tt_index, 1);
        let ctx = InterBlockContext::for_pquant(20);
        assert_eq!(ctx.tt_index, 2);
        assert_eq!(ctx.fcm, FrameCodingMode::Progressive);
        assert!(!ctx.ttmbf);
    }
}
