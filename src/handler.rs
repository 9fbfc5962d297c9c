//! # 命令处理逻辑模块
//!
//! 包含处理 `--encode` 和 `--decode` 模式的高级业务逻辑。
//! 本模块负责协调图像与文件 I/O、容量检查、调用核心隐写算法以及向用户报告结果。
//! 核心变换本身不做任何打印；所有进度与统计信息都从这里输出。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::steganography::{StegConfig, capacity, decode_steg, encode_steg};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Instant;

/// 输出文件的覆盖保护。
///
/// 目标文件已存在且未指定 `--force` 时返回错误，在任何数据写入之前拦截。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nPass --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 校验命令行传入的像素步长并转换为核心配置所用的类型。
fn checked_stride(stride: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(stride).context("The pixel stride must be at least 1.")
}

/// 处理 `--encode` 模式的执行逻辑。
///
/// 负责读取载体图像和载荷文件、报告并检查可用容量、调用编码器嵌入载荷，
/// 最后将结果图像保存到输出路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及编码配置的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 步长为 0，或输出文件已存在且未指定 `--force`。
/// * 无法打开载体图像或读取载荷文件。
/// * 载体图像的容量不足以容纳载荷 (此时不写出任何文件)。
/// * 无法保存结果图像。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let stride = checked_stride(args.stride)?;
    ensure_writable(&args.output, args.force)?;

    let start = Instant::now();
    let carrier = image::open(&args.input_public).with_context(|| {
        format!(
            "Unable to open carrier image: {}",
            args.input_public.to_string_lossy().red().bold()
        )
    })?;
    let mut grid = carrier.to_rgba8();
    println!("Carrier loaded in {:.3}s.", start.elapsed().as_secs_f64());

    let payload = fs::read(&args.input_private).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.input_private.to_string_lossy().red().bold()
        )
    })?;

    let available = capacity(grid.width(), grid.height(), stride);
    let required = payload.len();

    println!(
        "{} bytes available for encoding in {}",
        available.to_string().green().bold(),
        args.input_public.to_string_lossy()
    );
    println!(
        "{} bytes required for encoding of {}",
        required.to_string().green().bold(),
        args.input_private.to_string_lossy()
    );

    anyhow::ensure!(
        required <= available,
        "{} is not large enough to hold {}. \nRequired: {}, Available: {}",
        args.input_public.to_string_lossy().red().bold(),
        args.input_private.to_string_lossy().red().bold(),
        required.to_string().red().bold(),
        available.to_string().green().bold()
    );

    let config = StegConfig {
        stride,
        alpha: args.alpha,
    };

    let start = Instant::now();
    encode_steg(&mut grid, &payload, &config)
        .context("Failed to embed the payload into the carrier image.")?;

    grid.save(&args.output).with_context(|| {
        format!(
            "Unable to write encoded image: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;
    println!("Encoded in {:.3}s.", start.elapsed().as_secs_f64());

    println!(
        "The payload has been successfully hidden and saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 `--decode` 模式的执行逻辑。
///
/// 负责读取隐写图像、调用解码器扫描出嵌入的字节序列，
/// 最后将恢复的载荷写入输出文件。
///
/// 未经隐写的图像会恢复出空载荷，这是预期行为而非错误。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及解码配置的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 步长为 0，或输出文件已存在且未指定 `--force`。
/// * 无法打开输入图像。
/// * 无法写入输出文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let stride = checked_stride(args.stride)?;
    ensure_writable(&args.output, args.force)?;

    let start = Instant::now();
    let encoded = image::open(&args.input).with_context(|| {
        format!(
            "Unable to open encoded image: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;
    let grid = encoded.to_rgba8();

    let config = StegConfig {
        stride,
        ..StegConfig::default()
    };
    let payload = decode_steg(&grid, &config);
    println!(
        "{} bytes recovered in {:.3}s.",
        payload.len().to_string().green().bold(),
        start.elapsed().as_secs_f64()
    );

    fs::write(&args.output, payload).with_context(|| {
        format!(
            "Unable to write to output file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been successfully recovered and saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}
