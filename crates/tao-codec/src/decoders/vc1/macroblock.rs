//! 宏块级残差驱动
//!
//! 按块顺序调用块解码器, 维护块间共享的变换类型提示与 CBP 累积.
//! 宏块头本身的解析不在此处.

use tao_core::{BitReader, TaoResult};

use super::block::{InterBlockDecoder, InterBlockParams, InterBlockResult, TransformTypeRecord};
use super::coeff::CoefficientDecoder;
use super::types::TransformHint;

/// 一个帧间宏块的残差解码状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroblockResidual {
    hint: TransformHint,
    mquant: i32,
    first_block: bool,
    record: TransformTypeRecord,
    coded_pattern: u32,
}

impl MacroblockResidual {
    /// 以宏块头的变换提示与量化值开始一个宏块
    pub fn new(hint: TransformHint, mquant: i32) -> Self {
        Self {
            hint,
            mquant,
            first_block: true,
            record: TransformTypeRecord::new(),
            coded_pattern: 0,
        }
    }

    /// 下一块使用的变换提示
    pub fn hint(&self) -> TransformHint {
        self.hint
    }

    /// 是否尚未解码任何块
    pub fn is_first_block(&self) -> bool {
        self.first_block
    }

    /// 累积的宏块变换类型记录
    pub fn transform_record(&self) -> TransformTypeRecord {
        self.record
    }

    /// 累积的 CBP: 第 n 块的 pat 位于 `4 * n` 处
    pub fn coded_pattern(&self) -> u32 {
        self.coded_pattern
    }

    /// 解码宏块内第 `index` 个有系数的块
    ///
    /// 仅对 CBP 置位的块调用; 未编码的块不消耗任何位.
    #[allow(clippy::too_many_arguments)]
    pub fn decode_block<D: CoefficientDecoder + ?Sized>(
        &mut self,
        decoder: &InterBlockDecoder<'_>,
        reader: &mut BitReader<'_>,
        coeffs: &mut D,
        index: usize,
        skip_block: bool,
        block: &mut [i32; 64],
        dst: &mut [u8],
        stride: usize,
    ) -> TaoResult<InterBlockResult> {
        let params = InterBlockParams {
            index,
            mquant: self.mquant,
            hint: self.hint,
            first_block: self.first_block,
            skip_block,
        };
        let result = decoder.decode(
            reader,
            coeffs,
            &params,
            block,
            dst,
            stride,
            Some(&mut self.record),
        )?;

        self.coded_pattern |= u32::from(result.pat()) << (4 * index);
        // 非共用的宏块级类型只作用于第一个编码块, 帧级 TTMBF 时保持不变
        if !decoder.context().ttmbf {
            if let TransformHint::Signalled { shared: false, .. } = self.hint {
                self.hint = TransformHint::PerBlock;
            }
        }
        self.first_block = false;

        Ok(result)
    }
}
