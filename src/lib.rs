//! # tao-vc1
//!
//! Tao 多媒体框架的 VC-1 / WMV3 帧间块残差解码.
//!
//! 给定已解析的宏块头 (量化值, 变换类型提示) 与位流, 重建 P 宏块中单个
//! 8x8 块的残差: 选择变换划分, 按扫描表放置 run/level 系数, 反量化,
//! 逆变换并钳位叠加到目标像素平面.
//!
//! # 快速开始
//!
//! ```rust
//! use tao_vc1::codec::decoders::vc1::{
//!     AcCoeff, CodingSet, CoefficientDecoder, Codebook, HeaderCodebooks,
//!     InterBlockContext, InterBlockDecoder, InterBlockParams, TransformHint,
//! };
//! use tao_vc1::core::{BitReader, TaoResult};
//!
//! /// 只产出一个 DC 系数的解码器
//! struct DcOnly(i32);
//!
//! impl CoefficientDecoder for DcOnly {
//!     fn decode_next(
//!         &mut self,
//!         _reader: &mut BitReader<'_>,
//!         _set: CodingSet,
//!     ) -> TaoResult<Option<AcCoeff>> {
//!         Ok(Some(AcCoeff::new(true, 0, self.0)))
//!     }
//! }
//!
//! // SUBBLKPAT: 15 个符号的 4 位定长码
//! let codes: Vec<(u8, u16, u8)> = (0..15u8).map(|s| (4, u16::from(s), s)).collect();
//! let subblkpat = Codebook::new(&codes).unwrap();
//! let books = HeaderCodebooks::new([subblkpat.clone(), subblkpat.clone(), subblkpat]).unwrap();
//!
//! let ctx = InterBlockContext::for_pquant(4);
//! let decoder = InterBlockDecoder::new(&ctx, &books);
//! let params = InterBlockParams {
//!     index: 0,
//!     mquant: 4,
//!     hint: TransformHint::from_ttmb(0),
//!     first_block: true,
//!     skip_block: false,
//! };
//!
//! let mut reader = BitReader::new(&[]);
//! let mut block = [0i32; 64];
//! let mut plane = [128u8; 64];
//! let result = decoder
//!     .decode(&mut reader, &mut DcOnly(5), &params, &mut block, &mut plane, 8, None)
//!     .unwrap();
//! assert_eq!(result.pat(), 0xF);
//! assert_eq!(plane[0], 134);
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `tao-core` | 错误类型与位流读取器 |
//! | `tao-codec` | VC-1 帧间块残差解码 (`decoders::vc1`) |

/// 错误类型与位流读取器
pub use tao_core as core;

/// 编解码器库
pub use tao_codec as codec;

pub mod logging;

/// 获取版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
