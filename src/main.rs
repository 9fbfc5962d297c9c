use clap::Parser;
use colored::Colorize;

use steg_mark::{
    cli::Cli,
    handler::{handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，校验模式标志的互斥性，
/// 并根据指定的模式 (`--encode` 或 `--decode`) 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 两个模式标志互斥；同时指定属于用法错误，不执行任何操作
    if cli.encode && cli.decode {
        eprintln!(
            "{}",
            "Cannot encode and decode in the same run. Pick one.".red()
        );
        return Ok(());
    }

    if cli.encode {
        return handle_encode(cli.encode_args());
    }

    if cli.decode {
        return handle_decode(cli.decode_args());
    }

    // 未指定模式时给出提示并正常退出
    println!(
        "No mode selected. Pass --encode to hide a payload, or --decode to recover one. (Run with --help for details.)"
    );
    Ok(())
}
