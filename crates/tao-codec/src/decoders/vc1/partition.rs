//! 块划分选择
//!
//! 根据宏块头提示与码流确定块的变换形状和 "空子块" 模式.

use log::trace;
use tao_core::{BitReader, TaoResult};

use super::context::InterBlockContext;
use super::types::{TransformHint, TransformShape, TransformType};
use super::vlc::HeaderCodebooks;

/// 子块空模式: 置位表示对应子块无系数, 不做重建
///
/// 位序与形状相关: 第 `j` 个子块 (共 `n` 个) 对应位 `n - 1 - j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SubblockPattern(u8);

impl SubblockPattern {
    /// 所有子块都有系数
    pub const NONE_EMPTY: Self = Self(0);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// 第 `index` 个子块 (共 `count` 个) 是否为空
    pub fn is_empty(self, index: usize, count: usize) -> bool {
        debug_assert!(index < count && count <= 4, "子块索引越界");
        self.0 & (1 << (count - 1 - index)) != 0
    }
}

/// 划分选择结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub shape: TransformShape,
    pub empty: SubblockPattern,
}

/// 确定块的变换形状与空子块模式
///
/// 消耗的位: 按需的 TTBLK, 4x4 形状的 SUBBLKPAT, 以及满足条件时的二分模式.
pub fn select_partition(
    reader: &mut BitReader<'_>,
    codebooks: &HeaderCodebooks,
    ctx: &InterBlockContext,
    hint: TransformHint,
    first_block: bool,
) -> TaoResult<Partition> {
    let (tt, shared) = match hint {
        TransformHint::PerBlock => (codebooks.read_ttblk(reader, ctx.tt_index)?, false),
        TransformHint::Signalled { tt, shared } => (tt, shared),
    };

    let mut empty = 0u8;
    if tt == TransformType::Tt4x4 {
        empty = codebooks.read_empty_subblocks(reader, ctx.tt_index)?;
    }

    let (shape, fallback) = tt.normalize();
    let two_way = matches!(shape, TransformShape::Pair8x4 | TransformShape::Pair4x8);
    let reads_split = two_way
        && (ctx.ttmbf || (shared && !first_block) || (!ctx.res_rtm_flag && !first_block));

    if reads_split {
        // 码流中两位顺序与子块顺序相反
        let coded = reader.decode012()? as u8;
        empty = if coded != 0 { coded ^ 3 } else { 0 };
    } else if let Some(oriented) = fallback {
        empty = oriented;
    }

    trace!(
        "块划分: tt = {:?}, 形状 = {:?}, 空子块 = {:04b}",
        tt, shape, empty
    );

    Ok(Partition {
        shape,
        empty: SubblockPattern::from_bits(empty),
    })
}
