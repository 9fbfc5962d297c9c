//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构。与常见的子命令风格不同，
//! 编码与解码通过一对互斥的模式标志 (`--encode` / `--decode`) 选择，
//! 所有路径参数都带有默认值。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_DECODED_OUTPUT, DEFAULT_ENCODED_IMAGE, DEFAULT_INPUT_PRIVATE, DEFAULT_INPUT_PUBLIC,
    DEFAULT_STRIDE,
};
use crate::steganography::AlphaPolicy;

/// 一款基于 RGBA 最低有效位与像素存在标记的命令行隐写工具，
/// 用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复任意字节流。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 RGBA 最低有效位与像素存在标记的命令行隐写工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复任意字节流。"
)]
pub struct Cli {
    /// 编码模式：将载荷文件嵌入公开载体图像。
    #[arg(long, visible_alias = "ed")]
    pub encode: bool,

    /// 解码模式：从隐写图像中恢复载荷。与 --encode 互斥。
    #[arg(long, visible_alias = "dd")]
    pub decode: bool,

    /// [--encode] 载体图像的路径。
    #[arg(long, visible_alias = "ipub")]
    pub input_public: Option<PathBuf>,

    /// [--encode] 待隐藏载荷文件的路径 (作为原始字节流读取)。
    #[arg(long, visible_alias = "ipri")]
    pub input_private: Option<PathBuf>,

    /// [--decode] 隐写图像的路径。
    #[arg(long, visible_alias = "in")]
    pub input: Option<PathBuf>,

    /// 输出文件路径 (编码时默认为 output_encoded.png，解码时默认为 output_private.jpg)。
    #[arg(long, visible_alias = "out")]
    pub output: Option<PathBuf>,

    /// 像素步长；编码与解码两端必须一致。大于 1 时会跳过像素，以容量换取更低的嵌入密度。
    #[arg(long, default_value_t = DEFAULT_STRIDE)]
    pub stride: usize,

    /// [--encode] alpha 通道策略。
    #[arg(long, value_enum, default_value = "preserve")]
    pub alpha: AlphaArg,

    /// 允许覆盖已存在的输出文件。
    #[arg(long, short)]
    pub force: bool,
}

/// 命令行上可选的 alpha 通道策略。
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlphaArg {
    /// 保留载体像素原有的 alpha 值。
    Preserve,
    /// 将被触及像素的 alpha 强制为完全不透明。
    Opaque,
}

impl From<AlphaArg> for AlphaPolicy {
    fn from(arg: AlphaArg) -> Self {
        match arg {
            AlphaArg::Preserve => AlphaPolicy::Preserve,
            AlphaArg::Opaque => AlphaPolicy::ForceOpaque,
        }
    }
}

/// 编码流程所需的全部参数；默认路径已在此处解析完毕。
#[derive(Debug)]
pub struct EncodeArgs {
    pub input_public: PathBuf,
    pub input_private: PathBuf,
    pub output: PathBuf,
    pub stride: usize,
    pub alpha: AlphaPolicy,
    pub force: bool,
}

/// 解码流程所需的全部参数；默认路径已在此处解析完毕。
#[derive(Debug)]
pub struct DecodeArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stride: usize,
    pub force: bool,
}

impl Cli {
    /// 应用编码模式的默认路径，组装出 [`EncodeArgs`]。
    pub fn encode_args(&self) -> EncodeArgs {
        EncodeArgs {
            input_public: self
                .input_public
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PUBLIC)),
            input_private: self
                .input_private
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PRIVATE)),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENCODED_IMAGE)),
            stride: self.stride,
            alpha: self.alpha.into(),
            force: self.force,
        }
    }

    /// 应用解码模式的默认路径，组装出 [`DecodeArgs`]。
    pub fn decode_args(&self) -> DecodeArgs {
        DecodeArgs {
            input: self
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENCODED_IMAGE)),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DECODED_OUTPUT)),
            stride: self.stride,
            force: self.force,
        }
    }
}
