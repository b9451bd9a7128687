//! VC-1 块解码类型定义

use bitflags::bitflags;

/// 码流中的原始变换类型 (TTMB/TTBLK/TTFRM 解码结果)
///
/// 数值与码流语义一致, 也是写入宏块变换类型记录的值.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransformType {
    /// 单个 8x8 变换
    Tt8x8 = 0,
    /// 8x4, 仅下半部分有系数
    Tt8x4Bottom = 1,
    /// 8x4, 仅上半部分有系数
    Tt8x4Top = 2,
    /// 8x4, 上下两半
    Tt8x4 = 3,
    /// 4x8, 仅右半部分有系数
    Tt4x8Right = 4,
    /// 4x8, 仅左半部分有系数
    Tt4x8Left = 5,
    /// 4x8, 左右两半
    Tt4x8 = 6,
    /// 四个 4x4
    Tt4x4 = 7,
}

impl TransformType {
    /// 从 3 位原始码构造
    pub fn from_code(code: u8) -> Self {
        match code & 7 {
            0 => Self::Tt8x8,
            1 => Self::Tt8x4Bottom,
            2 => Self::Tt8x4Top,
            3 => Self::Tt8x4,
            4 => Self::Tt4x8Right,
            5 => Self::Tt4x8Left,
            6 => Self::Tt4x8,
            _ => Self::Tt4x4,
        }
    }

    /// 原始码值
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 归一化为规范形状, 带方向的变体同时给出回退子块模式 `2 - orientation`
    ///
    /// orientation 对 Top/Left 为 1: `Tt8x4Top` 得到模式 1 (下半为空),
    /// `Tt8x4Bottom` 得到模式 2 (上半为空).
    pub fn normalize(self) -> (TransformShape, Option<u8>) {
        match self {
            Self::Tt8x8 => (TransformShape::Full8x8, None),
            Self::Tt8x4 => (TransformShape::Pair8x4, None),
            Self::Tt8x4Top => (TransformShape::Pair8x4, Some(1)),
            Self::Tt8x4Bottom => (TransformShape::Pair8x4, Some(2)),
            Self::Tt4x8 => (TransformShape::Pair4x8, None),
            Self::Tt4x8Left => (TransformShape::Pair4x8, Some(1)),
            Self::Tt4x8Right => (TransformShape::Pair4x8, Some(2)),
            Self::Tt4x4 => (TransformShape::Quad4x4, None),
        }
    }
}

/// 规范变换形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformShape {
    Full8x8,
    Quad4x4,
    Pair8x4,
    Pair4x8,
}

impl TransformShape {
    /// 全部形状, 按描述表顺序
    pub const ALL: [TransformShape; 4] = [
        TransformShape::Full8x8,
        TransformShape::Quad4x4,
        TransformShape::Pair8x4,
        TransformShape::Pair4x8,
    ];

    /// 写入宏块变换类型记录的原始码
    pub fn transform_type(self) -> TransformType {
        match self {
            Self::Full8x8 => TransformType::Tt8x8,
            Self::Quad4x4 => TransformType::Tt4x4,
            Self::Pair8x4 => TransformType::Tt8x4,
            Self::Pair4x8 => TransformType::Tt4x8,
        }
    }
}

/// 帧编码模式 (FCM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameCodingMode {
    #[default]
    Progressive,
    FrameInterlace,
    FieldInterlace,
}

impl FrameCodingMode {
    /// 扫描表所属的编码制式
    pub fn regime(self) -> CodingRegime {
        match self {
            Self::Progressive => CodingRegime::Progressive,
            Self::FrameInterlace | Self::FieldInterlace => CodingRegime::Interlaced,
        }
    }
}

/// 扫描表制式, 与变换形状正交
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodingRegime {
    #[default]
    Progressive,
    Interlaced,
}

/// AC 系数 VLC 表族选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodingSet {
    HighMotionIntra = 0,
    #[default]
    HighMotionInter = 1,
    LowMotionIntra = 2,
    LowMotionInter = 3,
    MidRateIntra = 4,
    MidRateInter = 5,
    HighRateIntra = 6,
    HighRateInter = 7,
}

/// 系数解码器输出的一个 (last, skip, value) 三元组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcCoeff {
    /// 是否为子块最后一个系数
    pub last: bool,
    /// 放置前跳过的零系数个数
    pub skip: u32,
    /// 量化域系数值
    pub value: i32,
}

impl AcCoeff {
    pub fn new(last: bool, skip: u32, value: i32) -> Self {
        Self { last, skip, value }
    }
}

/// 块的变换类型提示 (来自宏块头)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformHint {
    /// 每块单独从码流读取 TTBLK
    PerBlock,
    /// 宏块级 (或帧级) 已给出变换类型
    Signalled {
        tt: TransformType,
        /// 宏块内所有块共用该变换类型, 非首块还需读取子块模式
        shared: bool,
    },
}

impl TransformHint {
    /// 由 TTMB 的 4 位原始值构造 (低 3 位为变换类型, 第 3 位为共用标志)
    pub fn from_ttmb(ttmb: u8) -> Self {
        Self::Signalled {
            tt: TransformType::from_code(ttmb),
            shared: ttmb & 8 != 0,
        }
    }
}

bitflags! {
    /// 8x8 块内四个 4x4 象限的编码标志 (块级 CBP 的 4 位)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CodedQuadrants: u8 {
        const TOP_LEFT = 0b1000;
        const TOP_RIGHT = 0b0100;
        const BOTTOM_LEFT = 0b0010;
        const BOTTOM_RIGHT = 0b0001;
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_type_code_roundtrip() {
        for code in 0..8u8 {
            assert_eq!(TransformType::from_code(code).code(), code);
        }
        // 高位 (共用标志) 被忽略
        assert_eq!(TransformType::from_code(0x0B), TransformType::Tt8x4);
    }

    #[test]
    fn test_orientation_folding() {
        assert_eq!(
            TransformType::Tt8x4Top.normalize(),
            (TransformShape::Pair8x4, Some(1))
        );
        assert_eq!(
            TransformType::Tt8x4Bottom.normalize(),
            (TransformShape::Pair8x4, Some(2))
        );
        assert_eq!(
            TransformType::Tt4x8Left.normalize(),
            (TransformShape::Pair4x8, Some(1))
        );
        assert_eq!(
            TransformType::Tt4x8Right.normalize(),
            (TransformShape::Pair4x8, Some(2))
        );
        assert_eq!(TransformType::Tt4x4.normalize(), (TransformShape::Quad4x4, None));
    }

    #[test]
    fn test_shape_record_codes() {
        assert_eq!(TransformShape::Full8x8.transform_type().code(), 0);
        assert_eq!(TransformShape::Pair8x4.transform_type().code(), 3);
        assert_eq!(TransformShape::Pair4x8.transform_type().code(), 6);
        assert_eq!(TransformShape::Quad4x4.transform_type().code(), 7);
    }

    #[test]
    fn test_ttmb_hint() {
        assert_eq!(
            TransformHint::from_ttmb(0x0D),
            TransformHint::Signalled {
                tt: TransformType::Tt4x8Left,
                shared: true
            }
        );
        assert_eq!(
            TransformHint::from_ttmb(0x07),
            TransformHint::Signalled {
                tt: TransformType::Tt4x4,
                shared: false
            }
        );
    }

    #[test]
    fn test_fcm_regime() {
        assert_eq!(FrameCodingMode::Progressive.regime(), CodingRegime::Progressive);
        assert_eq!(FrameCodingMode::FieldInterlace.regime(), CodingRegime::Interlaced);
    }
}
