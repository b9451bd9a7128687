//! VC-1 常量表: 扫描顺序, TTBLK 码表
//!
//! 扫描表的值是 8 列宽块内的行优先位置 (行 * 8 + 列), 子块表的值
//! 相对于子块左上角.

use super::types::TransformType;

// ============================================================================
// 逐行扫描 (progressive)
// ============================================================================

/// 帧间 8x8 逐行扫描
pub(super) const PROGRESSIVE_8X8_SCAN: [u8; 64] = [
    0, 8, 1, 2, 9, 16, 24, 17,
    10, 3, 4, 11, 18, 25, 32, 40,
    48, 56, 41, 33, 26, 19, 12, 5,
    6, 13, 20, 27, 34, 49, 57, 58,
    50, 42, 35, 28, 21, 14, 7, 15,
    22, 29, 36, 43, 51, 59, 60, 52,
    44, 37, 30, 23, 31, 38, 45, 53,
    61, 62, 54, 46, 39, 47, 55, 63,
];

/// 8x4 逐行扫描 (Simple/Main 与 Advanced 相同)
pub(super) const PROGRESSIVE_8X4_SCAN: [u8; 32] = [
    0, 1, 2, 8, 3, 9, 10, 16,
    4, 11, 17, 24, 18, 12, 5, 19,
    25, 13, 20, 26, 27, 6, 21, 28,
    14, 22, 29, 7, 30, 15, 23, 31,
];

/// 4x8 逐行扫描 (Simple/Main 与 Advanced 相同)
pub(super) const PROGRESSIVE_4X8_SCAN: [u8; 32] = [
    0, 8, 1, 16, 9, 24, 17, 2,
    32, 10, 25, 40, 18, 48, 33, 26,
    56, 41, 34, 3, 49, 57, 11, 42,
    19, 50, 27, 58, 35, 43, 51, 59,
];

/// 4x4 逐行扫描
pub(super) const PROGRESSIVE_4X4_SCAN: [u8; 16] = [
    0, 8, 16, 1,
    9, 24, 17, 2,
    10, 18, 25, 3,
    11, 26, 19, 27,
];

// ============================================================================
// 隔行扫描 (interlaced, FCM != progressive)
// ============================================================================

pub(super) const INTERLACED_8X8_SCAN: [u8; 64] = [
    0, 8, 1, 16, 24, 9, 2, 32,
    40, 48, 56, 17, 10, 3, 25, 18,
    11, 4, 33, 41, 49, 57, 26, 34,
    42, 50, 58, 19, 12, 5, 27, 20,
    13, 6, 35, 43, 51, 59, 28, 36,
    44, 52, 60, 21, 14, 7, 29, 22,
    15, 37, 45, 53, 61, 30, 38, 46,
    54, 62, 23, 31, 39, 47, 55, 63,
];

pub(super) const INTERLACED_8X4_SCAN: [u8; 32] = [
    0, 8, 16, 24, 1, 9, 2, 17,
    25, 10, 3, 18, 26, 4, 11, 19,
    12, 5, 27, 20, 13, 6, 28, 21,
    14, 7, 29, 22, 15, 30, 23, 31,
];

pub(super) const INTERLACED_4X8_SCAN: [u8; 32] = [
    0, 1, 2, 3, 8, 9, 16, 17,
    10, 11, 32, 40, 48, 18, 56, 24,
    25, 19, 33, 41, 49, 57, 26, 27,
    34, 35, 42, 43, 50, 51, 58, 59,
];

pub(super) const INTERLACED_4X4_SCAN: [u8; 16] = [
    0, 1, 2, 3,
    8, 9, 16, 17,
    10, 11, 24, 25,
    18, 19, 26, 27,
];

// ============================================================================
// TTBLK
// ============================================================================

/// TTBLK VLC 表, 按变换表索引 (0..3)
/// 格式: (位数, 码字, 符号)
pub(super) const TTBLK_VLC: [&[(u8, u16, u8)]; 3] = [
    &[
        (2, 0b00, 0),
        (2, 0b01, 1),
        (2, 0b11, 2),
        (3, 0b101, 3),
        (5, 0b10000, 4),
        (5, 0b10001, 5),
        (5, 0b10010, 6),
        (5, 0b10011, 7),
    ],
    &[
        (2, 0b11, 0),
        (3, 0b000, 1),
        (3, 0b001, 2),
        (3, 0b010, 3),
        (3, 0b011, 4),
        (3, 0b101, 5),
        (4, 0b1000, 6),
        (4, 0b1001, 7),
    ],
    &[
        (2, 0b01, 0),
        (3, 0b000, 1),
        (3, 0b001, 2),
        (3, 0b100, 3),
        (3, 0b110, 4),
        (3, 0b111, 5),
        (4, 0b1010, 6),
        (4, 0b1011, 7),
    ],
];

/// TTBLK 符号到变换类型的映射, 按变换表索引
pub(super) const TTBLK_TO_TT: [[TransformType; 8]; 3] = {
    use TransformType::*;
    [
        [
            Tt8x4, Tt4x8, Tt8x8, Tt4x4, Tt8x4Top, Tt8x4Bottom, Tt4x8Right, Tt4x8Left,
        ],
        [
            Tt8x8, Tt4x8Right, Tt4x8Left, Tt4x4, Tt8x4, Tt4x8, Tt8x4Bottom, Tt8x4Top,
        ],
        [
            Tt8x8, Tt4x8, Tt4x4, Tt8x4Bottom, Tt4x8Right, Tt4x8Left, Tt8x4, Tt8x4Top,
        ],
    ]
};
