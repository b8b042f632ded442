//! # 终端输出工具
//!
//! 面向用户的带标签彩色消息。诊断信息走 `log`，不经过这里。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

/// `[OK]` 成功
pub fn print_success(msg: &str) {
    tagged("[OK]".green().bold(), msg);
}

/// `[ERR]` 错误，写到 stderr
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// `[WARN]` 警告
pub fn print_warning(msg: &str) {
    tagged("[WARN]".yellow().bold(), msg);
}

/// `[*]` 信息
pub fn print_info(msg: &str) {
    tagged("[*]".blue().bold(), msg);
}

/// `[SKIP]` 已存在而跳过的输出
pub fn print_skip(msg: &str) {
    tagged("[SKIP]".dimmed(), msg);
}

/// `[DONE]` 命令结束时的汇总
pub fn print_done(msg: &str) {
    tagged("[DONE]".green().bold(), msg);
}

/// 单个离子步导出：`来源 #步号 -> 目标文件`
pub fn print_conversion(from: &str, to: &str) {
    tagged(
        "[OK]".green().bold(),
        &format!("{} {} {}", from.dimmed(), "->".cyan(), to),
    );
}

/// 命令标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH).dimmed();
    println!("\n{}\n  {}\n{}\n", rule, title.bold(), rule);
}
