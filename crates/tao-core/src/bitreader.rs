//! 比特流读取器.
//!
//! 按大端位序 (MSB first) 从字节缓冲区中读取定长码与 VLC 前缀, 是块级熵解码的位源.
//!
//! 读取器只向前移动, 不支持回退; 游标由单个解码调用独占推进.

use crate::{TaoError, TaoResult};

/// 比特流读取器
///
/// # 示例
/// ```
/// use tao_core::bitreader::BitReader;
///
/// let data = [0b10110001, 0b01010101];
/// let mut br = BitReader::new(&data);
/// assert_eq!(br.read_bits(4).unwrap(), 0b1011);
/// assert_eq!(br.read_bits(4).unwrap(), 0b0001);
/// assert_eq!(br.read_bits(8).unwrap(), 0b01010101);
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// 源数据
    data: &'a [u8],
    /// 已消耗的总位数
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// 创建新的比特流读取器
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// 从指定位偏移处开始读取 (跳过已由上层解析的头部)
    pub fn new_at(data: &'a [u8], bit_offset: usize) -> Self {
        Self {
            data,
            pos: bit_offset.min(data.len() * 8),
        }
    }

    /// 获取已读取的总位数
    pub fn bits_read(&self) -> usize {
        self.pos
    }

    /// 获取剩余可读位数
    pub fn bits_left(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// 是否已到达末尾
    pub fn is_eof(&self) -> bool {
        self.bits_left() == 0
    }

    /// 读取 1 个位
    pub fn read_bit(&mut self) -> TaoResult<u32> {
        if self.pos >= self.data.len() * 8 {
            return Err(TaoError::Eof);
        }
        let bit = (self.data[self.pos >> 3] >> (7 - (self.pos & 7))) & 1;
        self.pos += 1;
        Ok(u32::from(bit))
    }

    /// 读取 1 个位并返回布尔值
    pub fn read_flag(&mut self) -> TaoResult<bool> {
        Ok(self.read_bit()? != 0)
    }

    /// 读取 N 个位 (最多 32 位)
    ///
    /// 按大端位序读取, 返回值的低 N 位有效.
    pub fn read_bits(&mut self, n: u32) -> TaoResult<u32> {
        let value = self.peek_bits(n)?;
        self.pos += n as usize;
        Ok(value)
    }

    /// 窥视 N 个位 (不移动位置)
    pub fn peek_bits(&self, n: u32) -> TaoResult<u32> {
        if n > 32 {
            return Err(TaoError::InvalidArgument(format!(
                "peek_bits: n={} 超过 32 位",
                n,
            )));
        }
        if (n as usize) > self.bits_left() {
            return Err(TaoError::Eof);
        }
        Ok(self.peek_padded(n))
    }

    /// 窥视 N 个位, 超出流末尾的部分以 0 填充
    ///
    /// 供 VLC 查表使用: 码表按最大码长查找, 流末尾剩余位数可能少于最大码长.
    /// 调用方须自行检查实际码长不超过 `bits_left()`.
    pub fn peek_bits_padded(&self, n: u32) -> TaoResult<u32> {
        if n > 32 {
            return Err(TaoError::InvalidArgument(format!(
                "peek_bits_padded: n={} 超过 32 位",
                n,
            )));
        }
        Ok(self.peek_padded(n))
    }

    fn peek_padded(&self, n: u32) -> u32 {
        let mut result: u64 = 0;
        let mut pos = self.pos;
        let mut remaining = n;
        while remaining > 0 {
            let byte_idx = pos >> 3;
            let bit_in_byte = (pos & 7) as u32;
            let available = 8 - bit_in_byte;
            let take = remaining.min(available);
            let byte = self.data.get(byte_idx).copied().unwrap_or(0);
            let bits = (u32::from(byte) >> (available - take)) & ((1u32 << take) - 1);
            result = (result << take) | u64::from(bits);
            pos += take as usize;
            remaining -= take;
        }
        result as u32
    }

    /// 跳过 N 个位
    pub fn skip_bits(&mut self, n: u32) -> TaoResult<()> {
        if (n as usize) > self.bits_left() {
            return Err(TaoError::Eof);
        }
        self.pos += n as usize;
        Ok(())
    }

    /// 读取三值码 (0 -> 0, 10 -> 1, 11 -> 2)
    ///
    /// VC-1 的 2 路子块模式、宏块量化选择等字段都采用这种编码.
    pub fn decode012(&mut self) -> TaoResult<u32> {
        if self.read_bit()? == 0 {
            Ok(0)
        } else {
            Ok(self.read_bit()? + 1)
        }
    }

    /// 获取当前字节位置
    pub fn byte_position(&self) -> usize {
        self.pos >> 3
    }
}
