//! VLC 码本与块级头部码表
//!
//! TTBLK 码表内置; 4x4 子块模式 (SUBBLKPAT) 码表随位源由调用方提供.

use log::warn;
use tao_core::{BitReader, TaoError, TaoResult};

use super::tables::{TTBLK_TO_TT, TTBLK_VLC};
use super::types::TransformType;

/// 码本允许的最大码长
const MAX_CODE_LEN: u8 = 16;

/// 变换表索引个数 (由图像量化参数决定)
pub const TT_TABLE_COUNT: usize = 3;

/// 快速查找表项
#[derive(Debug, Clone, Copy, Default)]
struct CodebookEntry {
    /// 码长, 0 表示该前缀未分配
    len: u8,
    symbol: u8,
}

/// 前缀码 VLC 码本
///
/// 以最大码长为索引宽度的直接查找表, 单次 peek 完成解码.
#[derive(Debug, Clone)]
pub struct Codebook {
    max_len: u8,
    lookup: Vec<CodebookEntry>,
}

impl Codebook {
    /// 由 (位数, 码字, 符号) 列表构造码本
    ///
    /// 码字互为前缀或超出位数时返回 `InvalidArgument`.
    pub fn new(codes: &[(u8, u16, u8)]) -> TaoResult<Self> {
        let max_len = codes.iter().map(|&(len, _, _)| len).max().unwrap_or(0);
        if max_len == 0 || max_len > MAX_CODE_LEN {
            return Err(TaoError::InvalidArgument(format!(
                "码本最大码长非法: {}",
                max_len
            )));
        }

        let mut lookup = vec![CodebookEntry::default(); 1usize << max_len];
        for &(len, code, symbol) in codes {
            if len == 0 || u32::from(code) >= (1u32 << len) {
                return Err(TaoError::InvalidArgument(format!(
                    "码字 0x{:X} 不能用 {} 位表示",
                    code, len
                )));
            }
            let shift = max_len - len;
            let start = (code as usize) << shift;
            let entries = &mut lookup[start..start + (1usize << shift)];
            if entries.iter().any(|e| e.len != 0) {
                return Err(TaoError::InvalidArgument(format!(
                    "码字 0x{:X}/{} 与已有码字前缀冲突",
                    code, len
                )));
            }
            entries.fill(CodebookEntry { len, symbol });
        }

        Ok(Self { max_len, lookup })
    }

    /// 最大码长
    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    /// 从位源解码一个符号
    pub fn decode(&self, reader: &mut BitReader<'_>) -> TaoResult<u8> {
        let peek = reader.peek_bits_padded(u32::from(self.max_len))?;
        let entry = self.lookup[peek as usize];
        if entry.len == 0 {
            warn!("VLC 解码失败: 字节位置 = {}", reader.byte_position());
            return Err(TaoError::InvalidData(format!(
                "非法 VLC 前缀 0x{:X}",
                peek
            )));
        }
        reader.skip_bits(u32::from(entry.len))?;
        Ok(entry.symbol)
    }
}

/// 块级头部码表集合
///
/// 按变换表索引 (`tt_index`) 组织, 整个图像解码期间只读共享.
#[derive(Debug, Clone)]
pub struct HeaderCodebooks {
    ttblk: [Codebook; TT_TABLE_COUNT],
    subblkpat: [Codebook; TT_TABLE_COUNT],
}

impl HeaderCodebooks {
    /// 使用内置 TTBLK 码表与调用方提供的 SUBBLKPAT 码表
    ///
    /// SUBBLKPAT 符号 0..=14 对应 "有系数" 子块模式 1..=15.
    pub fn new(subblkpat: [Codebook; TT_TABLE_COUNT]) -> TaoResult<Self> {
        for (idx, book) in subblkpat.iter().enumerate() {
            if let Some(bad) = book.lookup.iter().find(|e| e.len != 0 && e.symbol > 14) {
                return Err(TaoError::InvalidArgument(format!(
                    "SUBBLKPAT 码表 {} 含越界符号 {}",
                    idx, bad.symbol
                )));
            }
        }
        Ok(Self {
            ttblk: [
                Codebook::new(TTBLK_VLC[0])?,
                Codebook::new(TTBLK_VLC[1])?,
                Codebook::new(TTBLK_VLC[2])?,
            ],
            subblkpat,
        })
    }

    /// 读取 TTBLK 并映射为变换类型
    pub fn read_ttblk(&self, reader: &mut BitReader<'_>, tt_index: usize) -> TaoResult<TransformType> {
        let idx = checked_tt_index(tt_index)?;
        let symbol = self.ttblk[idx].decode(reader)?;
        Ok(TTBLK_TO_TT[idx][symbol as usize & 7])
    }

    /// 读取 SUBBLKPAT, 返回 "空子块" 位图 (已按码流语义取反, 低 4 位有效)
    pub fn read_empty_subblocks(&self, reader: &mut BitReader<'_>, tt_index: usize) -> TaoResult<u8> {
        let idx = checked_tt_index(tt_index)?;
        let symbol = self.subblkpat[idx].decode(reader)?;
        Ok(!(symbol + 1) & 0xF)
    }
}

fn checked_tt_index(tt_index: usize) -> TaoResult<usize> {
    if tt_index < TT_TABLE_COUNT {
        Ok(tt_index)
    } else {
        Err(TaoError::InvalidArgument(format!(
            "变换表索引越界: {}",
            tt_index
        )))
    }
}

/// 由图像量化参数 PQUANT 推导变换表索引
pub fn tt_index_for_pquant(pquant: u8) -> usize {
    usize::from(pquant > 4) + usize::from(pquant > 12)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_codebook_decode_sequence() {
        let book = Codebook::new(TTBLK_VLC[0]).unwrap();
        // 00 | 101 | 10011 | 11 -> 符号 0, 3, 7, 2
        let data = [0b0010_1100, 0b1111_0000];
        let mut br = BitReader::new(&data);
        assert_eq!(book.decode(&mut br).unwrap(), 0);
        assert_eq!(book.decode(&mut br).unwrap(), 3);
        assert_eq!(book.decode(&mut br).unwrap(), 7);
        assert_eq!(book.decode(&mut br).unwrap(), 2);
        assert_eq!(br.bits_read(), 12);
    }

    #[test]
    fn test_codebook_rejects_prefix_conflict() {
        let result = Codebook::new(&[(1, 0b1, 0), (2, 0b10, 1)]);
        assert!(matches!(result, Err(TaoError::InvalidArgument(_))));

        let result = Codebook::new(&[(2, 0b100, 0)]);
        assert!(matches!(result, Err(TaoError::InvalidArgument(_))));
    }

    #[test]
    fn test_codebook_invalid_prefix() {
        // 只分配了 "1"
        let book = Codebook::new(&[(1, 1, 5)]).unwrap();
        let mut br = BitReader::new(&[0x00]);
        assert!(matches!(book.decode(&mut br), Err(TaoError::InvalidData(_))));
        assert_eq!(br.bits_read(), 0, "失败时不应消耗位");
    }

    #[test]
    fn test_codebook_near_end_of_stream() {
        let book = Codebook::new(TTBLK_VLC[0]).unwrap();
        // 剩余 2 位 "01": 短码仍可解码
        let mut br = BitReader::new_at(&[0b0000_0001], 6);
        assert_eq!(book.decode(&mut br).unwrap(), 1);
        // 剩余 3 位 "100": 需要 5 位的码字, 码流耗尽
        let mut br = BitReader::new_at(&[0b0000_0100], 5);
        assert_eq!(book.decode(&mut br), Err(TaoError::Eof));
    }

    #[test]
    fn test_ttblk_tables_are_complete() {
        for (idx, codes) in TTBLK_VLC.iter().enumerate() {
            let book = Codebook::new(codes).unwrap();
            let unassigned = book.lookup.iter().filter(|e| e.len == 0).count();
            assert_eq!(unassigned, 0, "TTBLK 码表 {} 应为完备前缀码", idx);
        }
    }

    #[test]
    fn test_read_ttblk_mapping() {
        let books = header_codebooks();
        // 表 0: "11" -> 符号 2 -> 8x8
        let mut br = BitReader::new(&[0b1100_0000]);
        assert_eq!(books.read_ttblk(&mut br, 0).unwrap(), TransformType::Tt8x8);
        // 表 1: "1001" -> 符号 7 -> 8x4 Top
        let mut br = BitReader::new(&[0b1001_0000]);
        assert_eq!(books.read_ttblk(&mut br, 1).unwrap(), TransformType::Tt8x4Top);
        // 表 2: "01" -> 符号 0 -> 8x8
        let mut br = BitReader::new(&[0b0100_0000]);
        assert_eq!(books.read_ttblk(&mut br, 2).unwrap(), TransformType::Tt8x8);

        let mut br = BitReader::new(&[0x00]);
        assert!(matches!(
            books.read_ttblk(&mut br, 3),
            Err(TaoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_read_empty_subblocks_inverts() {
        let books = header_codebooks();
        // "1" -> 符号 14 -> 有系数模式 0xF -> 空子块 0
        let mut br = BitReader::new(&[0b1000_0000]);
        assert_eq!(books.read_empty_subblocks(&mut br, 0).unwrap(), 0);
        // "01010" -> 符号 10 -> 有系数模式 0b1011 -> 空子块 0b0100
        let mut br = BitReader::new(&[0b0101_0000]);
        assert_eq!(books.read_empty_subblocks(&mut br, 0).unwrap(), 0b0100);
    }

    #[test]
    fn test_subblkpat_symbol_range_checked() {
        let bad = Codebook::new(&[(1, 0, 15), (1, 1, 0)]).unwrap();
        let ok = simple_subblkpat();
        let result = HeaderCodebooks::new([bad, ok.clone(), ok]);
        assert!(matches!(result, Err(TaoError::InvalidArgument(_))));
    }

    #[test]
    fn test_tt_index_for_pquant() {
        assert_eq!(tt_index_for_pquant(1), 0);
        assert_eq!(tt_index_for_pquant(4), 0);
        assert_eq!(tt_index_for_pquant(5), 1);
        assert_eq!(tt_index_for_pquant(12), 1);
        assert_eq!(tt_index_for_pquant(13), 2);
        assert_eq!(tt_index_for_pquant(31), 2);
    }
}
