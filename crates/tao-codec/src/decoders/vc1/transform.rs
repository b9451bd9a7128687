//! VC-1 整数逆变换
//!
//! 8 点核 `12/16/15/9/6/4`, 4 点核 `17/22/10`. 行变换 `(x + 4) >> 3`,
//! 列变换 `(x + 64) >> 7`, 8 点列变换的下半部分额外 `+1`.
//!
//! 系数切片从子块在 64 元素块中的起点开始 (行跨度 8), 目标切片从子块
//! 左上角像素开始, 结果以 0..=255 钳位叠加到目标平面.

/// 系数块的行跨度
const COEFF_STRIDE: usize = 8;

/// 逆变换原语: (系数, 目标像素, 目标跨度)
pub type InverseTransform = fn(&[i32], &mut [u8], usize);

/// 8 点一维逆变换, `rnd` 为舍入常量, `lower` 为下半部分额外舍入
#[inline]
fn idct8(s: [i32; 8], rnd: i32, lower: i32, shift: u32) -> [i32; 8] {
    let t1 = 12 * (s[0] + s[4]) + rnd;
    let t2 = 12 * (s[0] - s[4]) + rnd;
    let t3 = 16 * s[2] + 6 * s[6];
    let t4 = 6 * s[2] - 16 * s[6];

    let t5 = t1 + t3;
    let t6 = t2 + t4;
    let t7 = t2 - t4;
    let t8 = t1 - t3;

    let o1 = 16 * s[1] + 15 * s[3] + 9 * s[5] + 4 * s[7];
    let o2 = 15 * s[1] - 4 * s[3] - 16 * s[5] - 9 * s[7];
    let o3 = 9 * s[1] - 16 * s[3] + 4 * s[5] + 15 * s[7];
    let o4 = 4 * s[1] - 9 * s[3] + 15 * s[5] - 16 * s[7];

    [
        (t5 + o1) >> shift,
        (t6 + o2) >> shift,
        (t7 + o3) >> shift,
        (t8 + o4) >> shift,
        (t8 - o4 + lower) >> shift,
        (t7 - o3 + lower) >> shift,
        (t6 - o2 + lower) >> shift,
        (t5 - o1 + lower) >> shift,
    ]
}

/// 4 点一维逆变换
#[inline]
fn idct4(s: [i32; 4], rnd: i32, shift: u32) -> [i32; 4] {
    let t1 = 17 * (s[0] + s[2]) + rnd;
    let t2 = 17 * (s[0] - s[2]) + rnd;
    let t3 = 22 * s[1] + 10 * s[3];
    let t4 = 22 * s[3] - 10 * s[1];
    [
        (t1 + t3) >> shift,
        (t2 - t4) >> shift,
        (t2 + t4) >> shift,
        (t1 - t3) >> shift,
    ]
}

#[inline]
fn add_clamped(dst: &mut u8, value: i32) {
    *dst = (i32::from(*dst) + value).clamp(0, 255) as u8;
}

/// 对 w x h 区域叠加同一个值
fn add_dc(dst: &mut [u8], stride: usize, width: usize, height: usize, dc: i32) {
    for y in 0..height {
        let row = &mut dst[y * stride..y * stride + width];
        for px in row {
            add_clamped(px, dc);
        }
    }
}

/// 按步长取 N 个系数
#[inline]
fn gather<const N: usize>(src: &[i32], step: usize) -> [i32; N] {
    std::array::from_fn(|i| src[i * step])
}

/// 通用二维逆变换: 先行后列, 结果叠加到目标平面
fn inverse_2d(coeffs: &[i32], dst: &mut [u8], stride: usize, width: usize, height: usize) {
    let mut tmp = [0i32; 64];

    for y in 0..height {
        let src = &coeffs[y * COEFF_STRIDE..];
        let out = &mut tmp[y * COEFF_STRIDE..y * COEFF_STRIDE + width];
        if width == 8 {
            out.copy_from_slice(&idct8(gather(src, 1), 4, 0, 3));
        } else {
            out.copy_from_slice(&idct4(gather(src, 1), 4, 3));
        }
    }

    for x in 0..width {
        let col = &tmp[x..];
        if height == 8 {
            let out = idct8(gather(col, COEFF_STRIDE), 64, 1, 7);
            add_column(dst, stride, x, &out);
        } else {
            let out = idct4(gather(col, COEFF_STRIDE), 64, 7);
            add_column(dst, stride, x, &out);
        }
    }
}

fn add_column(dst: &mut [u8], stride: usize, x: usize, values: &[i32]) {
    for (y, &v) in values.iter().enumerate() {
        add_clamped(&mut dst[y * stride + x], v);
    }
}

/// 8x8 完整逆变换
pub fn inv_trans_8x8(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    inverse_2d(coeffs, dst, stride, 8, 8);
}

/// 8 宽 4 高完整逆变换
pub fn inv_trans_8x4(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    inverse_2d(coeffs, dst, stride, 8, 4);
}

/// 4 宽 8 高完整逆变换
pub fn inv_trans_4x8(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    inverse_2d(coeffs, dst, stride, 4, 8);
}

/// 4x4 完整逆变换
pub fn inv_trans_4x4(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    inverse_2d(coeffs, dst, stride, 4, 4);
}

/// 8x8 仅 DC 逆变换
pub fn inv_trans_8x8_dc(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    let dc = (3 * coeffs[0] + 1) >> 1;
    let dc = (3 * dc + 16) >> 5;
    add_dc(dst, stride, 8, 8, dc);
}

/// 8x4 仅 DC 逆变换
pub fn inv_trans_8x4_dc(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    let dc = (3 * coeffs[0] + 1) >> 1;
    let dc = (17 * dc + 64) >> 7;
    add_dc(dst, stride, 8, 4, dc);
}

/// 4x8 仅 DC 逆变换
pub fn inv_trans_4x8_dc(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    let dc = (17 * coeffs[0] + 4) >> 3;
    let dc = (12 * dc + 64) >> 7;
    add_dc(dst, stride, 4, 8, dc);
}

/// 4x4 仅 DC 逆变换
pub fn inv_trans_4x4_dc(coeffs: &[i32], dst: &mut [u8], stride: usize) {
    let dc = (17 * coeffs[0] + 4) >> 3;
    let dc = (17 * dc + 64) >> 7;
    add_dc(dst, stride, 4, 4, dc);
}
