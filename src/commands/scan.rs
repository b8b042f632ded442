//! # scan 命令实现
//!
//! 批量扫描目录下的 OUTCAR 文件，并行解析并汇总。
//!
//! ## 功能
//! - glob 模式匹配、可递归
//! - 使用 rayon 并行解析（每个文件一个独立的 OutcarReader）
//! - 终端表格与可选 CSV 输出
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `parsers/outcar.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::scan::ScanArgs;
use crate::error::{Result, VasptrajError};
use crate::parsers::OutcarReader;
use crate::utils::{output, progress};

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};
use walkdir::WalkDir;

/// 单个文件的扫描结果
#[derive(Debug, Clone, Serialize)]
pub struct ScanRecord {
    pub file: String,
    pub version: Option<u32>,
    pub elements: String,
    pub atoms: usize,
    pub states: usize,
    pub final_energy_ev: Option<f64>,
    pub final_max_force: Option<f64>,
}

/// 表格行
#[derive(Debug, Clone, Tabled)]
struct ScanRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "VASP")]
    version: String,
    #[tabled(rename = "Elements")]
    elements: String,
    #[tabled(rename = "Steps")]
    states: usize,
    #[tabled(rename = "Final E (eV)")]
    final_energy: String,
    #[tabled(rename = "Max force (eV/Å)")]
    max_force: String,
}

impl From<&ScanRecord> for ScanRow {
    fn from(r: &ScanRecord) -> Self {
        ScanRow {
            file: r.file.clone(),
            version: r.version.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
            elements: r.elements.clone(),
            states: r.states,
            final_energy: r
                .final_energy_ev
                .map(|e| format!("{:.6}", e))
                .unwrap_or_else(|| "-".to_string()),
            max_force: r
                .final_max_force
                .map(|f| format!("{:.4}", f))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning OUTCAR files");

    if !args.dir.is_dir() {
        return Err(VasptrajError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    let files = collect_outcar_files(&args.dir, &args.pattern, args.recursive)?;
    if files.is_empty() {
        return Err(VasptrajError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} file(s) to parse", files.len()));

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(files.len() as u64, "Parsing");

    let results: Vec<(PathBuf, Result<ScanRecord>)> = files
        .par_iter()
        .map(|path| {
            let record = scan_file(path);
            pb.inc(1);
            (path.clone(), record)
        })
        .collect();

    pb.finish_and_clear();

    let mut records = Vec::new();
    for (path, result) in results {
        match result {
            Ok(record) => records.push(record),
            Err(e) => output::print_error(&format!("{}: {}", path.display(), e)),
        }
    }

    let rows: Vec<ScanRow> = records.iter().map(ScanRow::from).collect();
    println!("{}", Table::new(&rows));

    if let Some(ref csv_path) = args.output {
        save_records_csv(&records, csv_path)?;
        output::print_success(&format!("Summary saved to '{}'", csv_path.display()));
    }

    output::print_done(&format!("Parsed {} of {} file(s)", records.len(), files.len()));

    Ok(())
}

/// 收集匹配的 OUTCAR 文件
fn collect_outcar_files(dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        VasptrajError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|name| glob_pattern.matches(name))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    Ok(files)
}

/// 解析单个文件
fn scan_file(path: &Path) -> Result<ScanRecord> {
    let mut reader = OutcarReader::new();
    let summary = reader.read_file(path)?;
    let last = reader.states().last();

    let elements = match last {
        Some(state) => state.element_summary(),
        None => summary.elements.join(" "),
    };

    Ok(ScanRecord {
        file: path.display().to_string(),
        version: reader.version(),
        elements,
        atoms: reader.total_atoms(),
        states: reader.states().len(),
        final_energy_ev: last.map(|s| s.energy()),
        final_max_force: last.map(|s| s.max_force()),
    })
}

/// 保存扫描结果到 CSV
fn save_records_csv(records: &[ScanRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| VasptrajError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
