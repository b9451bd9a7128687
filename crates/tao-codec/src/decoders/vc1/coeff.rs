//! AC 系数流适配器
//!
//! 将外部 run/level 系数解码器包装为单个子块的惰性系数序列.

use tao_core::{BitReader, TaoResult};

use super::types::{AcCoeff, CodingSet};

/// run/level AC 系数解码器
///
/// 实现方只依赖共享的位游标与编码集选择, 不保留跨调用状态.
pub trait CoefficientDecoder {
    /// 解码下一个系数
    ///
    /// 返回 `Ok(None)` 表示块结束标记, 不放置任何系数.
    fn decode_next(
        &mut self,
        reader: &mut BitReader<'_>,
        coding_set: CodingSet,
    ) -> TaoResult<Option<AcCoeff>>;
}

impl<D: CoefficientDecoder + ?Sized> CoefficientDecoder for &mut D {
    fn decode_next(
        &mut self,
        reader: &mut BitReader<'_>,
        coding_set: CodingSet,
    ) -> TaoResult<Option<AcCoeff>> {
        (**self).decode_next(reader, coding_set)
    }
}

/// 单个子块的系数序列
///
/// 遇到 `last` 系数、块结束标记或错误后停止产出.
pub struct CoefficientStream<'s, 'a, D: ?Sized> {
    decoder: &'s mut D,
    reader: &'s mut BitReader<'a>,
    coding_set: CodingSet,
    finished: bool,
}

impl<'s, 'a, D: CoefficientDecoder + ?Sized> CoefficientStream<'s, 'a, D> {
    pub fn new(decoder: &'s mut D, reader: &'s mut BitReader<'a>, coding_set: CodingSet) -> Self {
        Self {
            decoder,
            reader,
            coding_set,
            finished: false,
        }
    }

    /// 序列是否已结束
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<D: CoefficientDecoder + ?Sized> Iterator for CoefficientStream<'_, '_, D> {
    type Item = TaoResult<AcCoeff>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.decoder.decode_next(self.reader, self.coding_set) {
            Ok(Some(coeff)) => {
                self.finished = coeff.last;
                Some(Ok(coeff))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
