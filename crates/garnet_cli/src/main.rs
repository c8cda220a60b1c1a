use anyhow::Result;
use clap::Parser;
use garnet_driver::{read_source, verify, DriverError};
use std::process;

#[derive(Parser)]
#[command(name = "garnetc")]
#[command(about = "Garnet 静态校验器 - 通过输出 0，失败输出 1，无法读取输出 2", version)]
struct Cli {
    /// 输入文件
    input: String,

    /// 关闭诊断输出的颜色
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let code = cmd_verify(&cli.input, !cli.no_color)?;
    process::exit(code);
}

/// 校验命令：标准输出只打印结论码，诊断写到标准错误
fn cmd_verify(input: &str, use_colors: bool) -> Result<i32> {
    let source = match read_source(input) {
        Ok(source) => source,
        Err(err) => return report(&err, input, None, use_colors),
    };

    match verify(&source) {
        Ok(summary) => {
            log::info!(
                "{}: {} lines, {} methods, {} globals",
                input,
                summary.line_count,
                summary.method_count,
                summary.global_count
            );
            println!("0");
            Ok(0)
        }
        Err(err) => report(&err, input, Some(&source), use_colors),
    }
}

fn report(err: &DriverError, input: &str, source: Option<&str>, use_colors: bool) -> Result<i32> {
    let code = err.exit_code();
    println!("{}", code);
    err.emit(Some(input), source, use_colors)?;
    Ok(code)
}
