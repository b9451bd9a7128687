//! 扫描表提供者
//!
//! 按 (变换形状, 扫描制式) 选择固定的扫描顺序表, 纯查表无状态.

use super::block::ShapeDescriptor;
use super::types::{CodingRegime, TransformShape};

/// 返回 (形状, 制式) 对应的扫描表
///
/// 表长度等于该形状单个子块的系数容量 (64/16/32/32).
pub fn scan_table(shape: TransformShape, regime: CodingRegime) -> &'static [u8] {
    ShapeDescriptor::of(shape).scan(regime)
}

/// 子块的 (宽, 高)
pub fn subblock_dims(shape: TransformShape) -> (usize, usize) {
    match shape {
        TransformShape::Full8x8 => (8, 8),
        TransformShape::Quad4x4 => (4, 4),
        TransformShape::Pair8x4 => (8, 4),
        TransformShape::Pair4x8 => (4, 8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIMES: [CodingRegime; 2] = [CodingRegime::Progressive, CodingRegime::Interlaced];

    #[test]
    fn test_scan_tables_are_permutations() {
        for shape in TransformShape::ALL {
            let (w, h) = subblock_dims(shape);
            for regime in REGIMES {
                let table = scan_table(shape, regime);
                assert_eq!(table.len(), w * h, "{shape:?}/{regime:?} 表长度错误");

                let mut seen = [false; 64];
                for &pos in table {
                    let (row, col) = (pos as usize / 8, pos as usize % 8);
                    assert!(
                        row < h && col < w,
                        "{shape:?}/{regime:?} 位置 {pos} 超出子块范围"
                    );
                    assert!(!seen[pos as usize], "{shape:?}/{regime:?} 位置 {pos} 重复");
                    seen[pos as usize] = true;
                }
            }
        }
    }

    #[test]
    fn test_scan_tables_start_at_dc() {
        for shape in TransformShape::ALL {
            for regime in REGIMES {
                assert_eq!(scan_table(shape, regime)[0], 0, "首个扫描位置应为 DC");
            }
        }
    }

    #[test]
    fn test_progressive_8x8_prefers_vertical() {
        // 帧间 8x8 逐行扫描先走 (1,0) 再走 (0,1)
        let table = scan_table(TransformShape::Full8x8, CodingRegime::Progressive);
        assert_eq!(&table[..4], &[0, 8, 1, 2]);
    }

    #[test]
    fn test_interlaced_4x4_row_first() {
        let table = scan_table(TransformShape::Quad4x4, CodingRegime::Interlaced);
        assert_eq!(&table[..4], &[0, 1, 2, 3]);
    }
}
