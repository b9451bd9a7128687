//! 帧间块反量化
//!
//! `scale = 2 * quant + halfpq`, 非 pquantizer 模式下逐系数加 ±quant 偏置 (远离零).

/// 宏块量化上下文
///
/// 由宏块的有符号量化值 (MQUANT) 与图像级半步标志推导.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizerContext {
    quant: i32,
    scale: i32,
    bias: bool,
}

impl QuantizerContext {
    /// 创建量化上下文
    ///
    /// - `mquant`: 有符号宏块量化值, 负值表示不叠加半步
    /// - `halfpq`: 图像级半步标志
    /// - `pquantizer`: 为真时量化器工作在非均匀模式, 不加偏置
    pub fn new(mquant: i32, halfpq: bool, pquantizer: bool) -> Self {
        let quant = mquant.abs();
        let half = if mquant < 0 { 0 } else { i32::from(halfpq) };
        Self {
            quant,
            scale: 2 * quant + half,
            bias: !pquantizer,
        }
    }

    /// 量化步长绝对值
    pub fn quant(&self) -> i32 {
        self.quant
    }

    /// 系数缩放因子
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// 是否逐系数叠加偏置
    pub fn uses_bias(&self) -> bool {
        self.bias
    }

    /// 反量化单个系数
    pub fn dequantize(&self, level: i32) -> i32 {
        let value = level.wrapping_mul(self.scale);
        if !self.bias {
            value
        } else if value < 0 {
            value.wrapping_sub(self.quant)
        } else {
            value.wrapping_add(self.quant)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_with_half_step() {
        assert_eq!(QuantizerContext::new(4, false, false).scale(), 8);
        assert_eq!(QuantizerContext::new(4, true, false).scale(), 9);
        // 负 mquant 不叠加半步
        let q = QuantizerContext::new(-4, true, false);
        assert_eq!(q.scale(), 8);
        assert_eq!(q.quant(), 4);
    }

    #[test]
    fn test_bias_pushes_away_from_zero() {
        let q = QuantizerContext::new(4, false, false);
        // 5 * 8 ± 4
        assert_eq!(q.dequantize(5), 44);
        assert_eq!(q.dequantize(-5), -44);
        assert_eq!(q.dequantize(1), 12);
        assert_eq!(q.dequantize(-1), -12);
    }

    #[test]
    fn test_pquantizer_disables_bias() {
        let q = QuantizerContext::new(6, true, true);
        assert!(!q.uses_bias());
        assert_eq!(q.dequantize(3), 39);
        assert_eq!(q.dequantize(-3), -39);
    }

    #[test]
    fn test_extreme_levels_wrap() {
        let q = QuantizerContext::new(31, true, false);
        // 乘积接近 i32::MAX, 叠加偏置后回绕
        let level = i32::MAX / 63;
        let product = level.wrapping_mul(63);
        assert_eq!(q.dequantize(level), product.wrapping_add(31));
        assert!(q.dequantize(level) < 0);
        assert_eq!(q.dequantize(-level), (-product).wrapping_sub(31));
        assert_eq!(q.dequantize(i32::MAX), i32::MAX.wrapping_mul(63).wrapping_add(31));
    }

    #[test]
    fn test_sign_symmetry() {
        for mquant in [1, 2, 7, 31, -3] {
            for halfpq in [false, true] {
                let plain = QuantizerContext::new(mquant, halfpq, true);
                let biased = QuantizerContext::new(mquant, halfpq, false);
                for level in 1..40 {
                    assert_eq!(plain.dequantize(-level), -plain.dequantize(level));
                    assert_eq!(biased.dequantize(level) + biased.dequantize(-level), 0);
                    assert_eq!(
                        biased.dequantize(level) - plain.dequantize(level),
                        biased.quant(),
                        "偏置应等于 quant"
                    );
                }
            }
        }
    }
}
