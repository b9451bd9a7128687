//! # tao-codec
//!
//! Tao 多媒体框架编解码器库.
//!
//! 当前提供 VC-1 / WMV3 P 图像的帧间块残差解码 ([`decoders::vc1`]):
//! 变换划分选择, 扫描表, 反量化, 以及 8x8/8x4/4x8/4x4 整数逆变换.
//! 宏块头与 AC 系数 VLC 的解析由调用方负责, 系数经
//! [`decoders::vc1::CoefficientDecoder`] 接入.

pub mod decoders;
