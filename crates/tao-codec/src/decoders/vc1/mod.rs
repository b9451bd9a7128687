//! VC-1 / WMV3 帧间块残差解码
//!
//! 对一个已解析宏块头的 P 宏块, 从位流重建单个 8x8 块的残差并叠加到目标平面.
//!
//! 已实现:
//! - 变换类型选择: 宏块级 TTMB, 块级 TTBLK, 4x4 子块模式 SUBBLKPAT, 二分模式
//! - 方向变体 (8x4 Top/Bottom, 4x8 Left/Right) 归一化
//! - 逐行 / 隔行两套扫描表
//! - 反量化 (半步, pquantizer 偏置)
//! - 越界游标静默截断
//! - 8 种整数逆变换 (4 种形状的完整变换与 DC 快速路径), 钳位叠加
//! - 宏块级变换类型记录与 CBP 累积
//!
//! AC 系数的 run/level VLC 解码由调用方通过 [`CoefficientDecoder`] 提供.
//!
//! ## 模块结构
//!
//! - `types`: 变换类型, 形状, 编码模式, 系数三元组
//! - `tables`: 扫描表与 TTBLK 码表
//! - `scan`: 按 (形状, 制式) 选择扫描表
//! - `vlc`: 前缀码码本与块级头部码表
//! - `context`: 图像级解码上下文
//! - `coeff`: 系数流适配器
//! - `partition`: 块划分选择
//! - `dequant`: 反量化
//! - `transform`: 逆变换原语
//! - `block`: 块残差重建
//! - `macroblock`: 宏块级驱动

mod block;
mod coeff;
mod context;
mod dequant;
mod macroblock;
mod partition;
pub mod scan;
mod tables;
pub mod transform;
mod types;
mod vlc;

pub use block::{
    BLOCKS_PER_MACROBLOCK, InterBlockDecoder, InterBlockParams, InterBlockResult,
    ShapeDescriptor, SubblockReport, TransformTypeRecord,
};
pub use coeff::{CoefficientDecoder, CoefficientStream};
pub use context::InterBlockContext;
pub use dequant::QuantizerContext;
pub use macroblock::MacroblockResidual;
pub use partition::{Partition, SubblockPattern, select_partition};
pub use types::{
    AcCoeff, CodedQuadrants, CodingRegime, CodingSet, FrameCodingMode, TransformHint,
    TransformShape, TransformType,
};
pub use vlc::{Codebook, HeaderCodebooks, TT_TABLE_COUNT, tt_index_for_pquant};
