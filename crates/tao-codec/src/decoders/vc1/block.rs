//! 帧间块残差重建
//!
//! 每个块: 划分选择 -> 逐子块拉取系数, 按扫描表放置并反量化 -> 按形状逆变换叠加.
//! 四种形状由 [`ShapeDescriptor`] 表驱动, 共用同一个子块循环.

use log::{debug, trace};
use tao_core::{BitReader, TaoError, TaoResult};

use super::coeff::{CoefficientDecoder, CoefficientStream};
use super::context::InterBlockContext;
use super::dequant::QuantizerContext;
use super::partition::select_partition;
use super::scan::subblock_dims;
use super::tables::{
    INTERLACED_4X4_SCAN, INTERLACED_4X8_SCAN, INTERLACED_8X4_SCAN, INTERLACED_8X8_SCAN,
    PROGRESSIVE_4X4_SCAN, PROGRESSIVE_4X8_SCAN, PROGRESSIVE_8X4_SCAN, PROGRESSIVE_8X8_SCAN,
};
use super::transform::{
    InverseTransform, inv_trans_4x4, inv_trans_4x4_dc, inv_trans_4x8, inv_trans_4x8_dc,
    inv_trans_8x4, inv_trans_8x4_dc, inv_trans_8x8, inv_trans_8x8_dc,
};
use super::types::{CodedQuadrants, CodingRegime, TransformHint, TransformShape, TransformType};
use super::vlc::HeaderCodebooks;

/// 宏块内的块数 (4 亮度 + 2 色度)
pub const BLOCKS_PER_MACROBLOCK: usize = 6;

/// 变换形状描述表项
pub struct ShapeDescriptor {
    pub shape: TransformShape,
    /// 子块个数
    pub subblocks: usize,
    /// 每个子块的系数容量
    pub capacity: usize,
    /// 子块左上角 (x, y), 按子块顺序
    origins: &'static [(usize, usize)],
    /// 子块覆盖的 4x4 象限
    quadrants: &'static [CodedQuadrants],
    /// 扫描表: [逐行, 隔行]
    scans: [&'static [u8]; 2],
    pub dc: InverseTransform,
    pub full: InverseTransform,
}

static DESCRIPTORS: [ShapeDescriptor; 4] = [
    ShapeDescriptor {
        shape: TransformShape::Full8x8,
        subblocks: 1,
        capacity: 64,
        origins: &[(0, 0)],
        quadrants: &[CodedQuadrants::all()],
        scans: [&PROGRESSIVE_8X8_SCAN, &INTERLACED_8X8_SCAN],
        dc: inv_trans_8x8_dc,
        full: inv_trans_8x8,
    },
    ShapeDescriptor {
        shape: TransformShape::Quad4x4,
        subblocks: 4,
        capacity: 16,
        origins: &[(0, 0), (4, 0), (0, 4), (4, 4)],
        quadrants: &[
            CodedQuadrants::TOP_LEFT,
            CodedQuadrants::TOP_RIGHT,
            CodedQuadrants::BOTTOM_LEFT,
            CodedQuadrants::BOTTOM_RIGHT,
        ],
        scans: [&PROGRESSIVE_4X4_SCAN, &INTERLACED_4X4_SCAN],
        dc: inv_trans_4x4_dc,
        full: inv_trans_4x4,
    },
    ShapeDescriptor {
        shape: TransformShape::Pair8x4,
        subblocks: 2,
        capacity: 32,
        origins: &[(0, 0), (0, 4)],
        quadrants: &[CodedQuadrants::TOP, CodedQuadrants::BOTTOM],
        scans: [&PROGRESSIVE_8X4_SCAN, &INTERLACED_8X4_SCAN],
        dc: inv_trans_8x4_dc,
        full: inv_trans_8x4,
    },
    ShapeDescriptor {
        shape: TransformShape::Pair4x8,
        subblocks: 2,
        capacity: 32,
        origins: &[(0, 0), (4, 0)],
        quadrants: &[CodedQuadrants::LEFT, CodedQuadrants::RIGHT],
        scans: [&PROGRESSIVE_4X8_SCAN, &INTERLACED_4X8_SCAN],
        dc: inv_trans_4x8_dc,
        full: inv_trans_4x8,
    },
];

impl ShapeDescriptor {
    /// 查找形状的描述表项
    pub fn of(shape: TransformShape) -> &'static Self {
        match shape {
            TransformShape::Full8x8 => &DESCRIPTORS[0],
            TransformShape::Quad4x4 => &DESCRIPTORS[1],
            TransformShape::Pair8x4 => &DESCRIPTORS[2],
            TransformShape::Pair4x8 => &DESCRIPTORS[3],
        }
    }

    /// 子块在 64 元素系数块中的起点
    pub fn coeff_offset(&self, index: usize) -> usize {
        let (x, y) = self.origins[index];
        y * 8 + x
    }

    /// 子块在目标平面中的起点
    pub fn pixel_offset(&self, index: usize, stride: usize) -> usize {
        let (x, y) = self.origins[index];
        y * stride + x
    }

    /// 子块覆盖的象限
    pub fn quadrants(&self, index: usize) -> CodedQuadrants {
        self.quadrants[index]
    }

    /// 制式对应的扫描表, 长度等于 `capacity`
    pub fn scan(&self, regime: CodingRegime) -> &'static [u8] {
        match regime {
            CodingRegime::Progressive => self.scans[0],
            CodingRegime::Interlaced => self.scans[1],
        }
    }
}

/// 宏块变换类型记录: 每块 4 位, 第 n 块位于 `4 * n` 处
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformTypeRecord(u32);

impl TransformTypeRecord {
    pub fn new() -> Self {
        Self(0)
    }

    /// 按位或记录第 `index` 块的形状
    pub fn accumulate(&mut self, index: usize, shape: TransformShape) {
        self.0 |= u32::from(shape.transform_type().code()) << (4 * index);
    }

    /// 第 `index` 块记录的变换类型
    pub fn get(&self, index: usize) -> TransformType {
        TransformType::from_code(((self.0 >> (4 * index)) & 0xF) as u8)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

/// 单个子块的解码报告
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubblockReport {
    /// 放置的系数个数
    pub placed: usize,
    /// 结束时的扫描游标
    pub end_position: usize,
    /// 游标越过子块容量, 其余系数被丢弃
    pub truncated: bool,
    /// 是否执行了逆变换
    pub reconstructed: bool,
}

impl SubblockReport {
    /// 是否走 DC 快速路径
    pub fn dc_only(&self) -> bool {
        self.reconstructed && self.end_position == 1
    }
}

/// 块解码结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterBlockResult {
    /// 重建覆盖的象限 (块级 CBP 的 4 位)
    pub pattern: CodedQuadrants,
    /// 最终变换形状
    pub shape: TransformShape,
    /// 各子块报告, 有效项数为 `subblocks`
    pub coded: [SubblockReport; 4],
    pub subblocks: usize,
}

impl InterBlockResult {
    /// 块级 CBP 位图
    pub fn pat(&self) -> u8 {
        self.pattern.bits()
    }

    /// 有效的子块报告
    pub fn reports(&self) -> &[SubblockReport] {
        &self.coded[..self.subblocks]
    }
}

/// 块级调用参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterBlockParams {
    /// 块在宏块内的序号 (0..6)
    pub index: usize,
    /// 有符号宏块量化值
    pub mquant: i32,
    /// 宏块头给出的变换类型提示
    pub hint: TransformHint,
    /// 是否为宏块内第一个编码块
    pub first_block: bool,
    /// 只消耗系数, 不写目标平面
    pub skip_block: bool,
}

/// 帧间块解码器
///
/// 持有图像级上下文与头部码表的引用, 本身无可变状态.
#[derive(Debug, Clone, Copy)]
pub struct InterBlockDecoder<'c> {
    ctx: &'c InterBlockContext,
    codebooks: &'c HeaderCodebooks,
}

impl<'c> InterBlockDecoder<'c> {
    pub fn new(ctx: &'c InterBlockContext, codebooks: &'c HeaderCodebooks) -> Self {
        Self { ctx, codebooks }
    }

    pub fn context(&self) -> &InterBlockContext {
        self.ctx
    }

    /// 解码一个帧间块并叠加到目标平面
    ///
    /// `dst` 从块左上角像素开始, 须容纳跨度为 `stride` 的 8x8 区域.
    /// `block` 在解码前清零, 返回后保存反量化后的系数.
    /// 系数解码失败时立即返回错误, 已重建的子块不回滚.
    #[allow(clippy::too_many_arguments)]
    pub fn decode<D: CoefficientDecoder + ?Sized>(
        &self,
        reader: &mut BitReader<'_>,
        coeffs: &mut D,
        params: &InterBlockParams,
        block: &mut [i32; 64],
        dst: &mut [u8],
        stride: usize,
        record: Option<&mut TransformTypeRecord>,
    ) -> TaoResult<InterBlockResult> {
        check_destination(dst.len(), stride)?;
        if params.index >= BLOCKS_PER_MACROBLOCK {
            return Err(TaoError::InvalidArgument(format!(
                "块序号越界: {}",
                params.index
            )));
        }

        block.fill(0);

        let partition = select_partition(
            reader,
            self.codebooks,
            self.ctx,
            params.hint,
            params.first_block,
        )?;
        let desc = ShapeDescriptor::of(partition.shape);
        let scan = desc.scan(self.ctx.fcm.regime());
        let quant = QuantizerContext::new(params.mquant, self.ctx.halfpq, self.ctx.pquantizer);

        let mut coded = [SubblockReport::default(); 4];
        let mut pattern = CodedQuadrants::empty();

        for (j, report) in coded.iter_mut().enumerate().take(desc.subblocks) {
            if partition.empty.is_empty(j, desc.subblocks) {
                continue;
            }
            pattern |= desc.quadrants(j);

            let off = desc.coeff_offset(j);
            let mut cursor = 0usize;
            let stream = CoefficientStream::new(&mut *coeffs, &mut *reader, self.ctx.coding_set);
            for item in stream {
                let coeff = item?;
                cursor = cursor.saturating_add(coeff.skip as usize);
                if cursor >= desc.capacity {
                    report.truncated = true;
                    debug!(
                        "块 {} 子块 {}: 游标 {} 越过容量 {}, 丢弃剩余系数",
                        params.index, j, cursor, desc.capacity
                    );
                    break;
                }
                block[off + usize::from(scan[cursor])] = quant.dequantize(coeff.value);
                cursor += 1;
                report.placed += 1;
            }
            report.end_position = cursor;

            if !params.skip_block {
                let coeffs_at = &block[off..];
                let pixels = &mut dst[desc.pixel_offset(j, stride)..];
                if cursor == 1 {
                    (desc.dc)(coeffs_at, pixels, stride);
                } else {
                    (desc.full)(coeffs_at, pixels, stride);
                }
                report.reconstructed = true;
            }
        }

        if let Some(record) = record {
            record.accumulate(params.index, partition.shape);
        }

        trace!(
            "P 块 {}: 形状 = {:?}, 子块尺寸 = {:?}, pat = {:X}",
            params.index,
            partition.shape,
            subblock_dims(partition.shape),
            pattern.bits()
        );

        Ok(InterBlockResult {
            pattern,
            shape: partition.shape,
            coded,
            subblocks: desc.subblocks,
        })
    }
}

/// 目标切片须容纳 8x8 区域: `stride >= 8` 且 `7 * stride + 8 <= len`
fn check_destination(len: usize, stride: usize) -> TaoResult<()> {
    let needed = stride.checked_mul(7).and_then(|v| v.checked_add(8));
    match needed {
        Some(needed) if stride >= 8 && needed <= len => Ok(()),
        _ => Err(TaoError::InvalidArgument(format!(
            "目标平面不足以容纳 8x8 块: 长度 = {}, 跨度 = {}",
            len, stride
        ))),
    }
}
