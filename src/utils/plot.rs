//! # 能量曲线绘图
//!
//! 使用 `plotters` 绘制 能量-离子步 曲线，按输出文件扩展名选择 SVG 或 PNG。
//!
//! ## 依赖关系
//! - 被 `commands/energies.rs` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, VasptrajError};

use plotters::prelude::*;
use std::path::Path;

/// 绘制能量曲线，points 为 (步号, 能量 eV)
pub fn plot_energy_profile(
    points: &[(usize, f64)],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    if points.is_empty() {
        return Err(VasptrajError::PlotError("No data to plot".to_string()));
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_profile(&root, points, title)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_profile(&root, points, title)?;
        root.present().map_err(plot_err)?;
    }

    Ok(())
}

fn plot_err<E: std::fmt::Debug>(e: E) -> VasptrajError {
    VasptrajError::PlotError(format!("{:?}", e))
}

/// y 轴范围，上下各留 10% 余量；能量全相同时给一个最小余量
fn y_range(points: &[(usize, f64)]) -> (f64, f64) {
    let y_min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let margin = ((y_max - y_min).abs() * 0.1).max(1e-3);
    (y_min - margin, y_max + margin)
}

fn draw_profile<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[(usize, f64)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let x_min = points.first().map(|(x, _)| *x as f64).unwrap_or(1.0);
    let x_max = points.last().map(|(x, _)| *x as f64).unwrap_or(1.0);
    let (y_lo, y_hi) = y_range(points);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d((x_min - 0.5)..(x_max + 0.5), y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Ionic step")
        .y_desc("Energy (eV)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|(x, y)| (*x as f64, *y)),
            BLUE.stroke_width(2),
        ))
        .map_err(plot_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|(x, y)| Circle::new((*x as f64, *y), 4, BLUE.filled())),
        )
        .map_err(plot_err)?
        .label("E(sigma->0)")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.filled()));

    // 标记最低能量
    if let Some((min_x, min_y)) = points
        .iter()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    {
        chart
            .draw_series(std::iter::once(Circle::new(
                (*min_x as f64, *min_y),
                7,
                GREEN.filled(),
            )))
            .map_err(plot_err)?
            .label("Lowest energy")
            .legend(|(x, y)| Circle::new((x + 10, y), 4, GREEN.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_range_has_margin() {
        let (lo, hi) = y_range(&[(1, -10.0), (2, -12.0)]);
        assert!((lo + 12.2).abs() < 1e-9);
        assert!((hi + 9.8).abs() < 1e-9);

        let (lo, hi) = y_range(&[(1, -5.0)]);
        assert!(lo < -5.0 && hi > -5.0);
    }

    #[test]
    fn test_empty_points_rejected() {
        let path = std::env::temp_dir().join("vasptraj_never_written.svg");
        assert!(plot_energy_profile(&[], &path, "t", 100, 100).is_err());
    }
}
