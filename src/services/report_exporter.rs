//! 报告导出服务 - 业务能力层
//!
//! 只负责"把结果和日志写成 Excel"能力，不修改输入

use crate::error::AppResult;
use crate::models::{BatchReport, Coordinate};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// 结果表名称
pub const RESULTS_SHEET: &str = "Coordenadas";
/// 日志表名称
pub const LOGS_SHEET: &str = "Logs";
/// 没有日志时的占位文本
pub const NO_ERRORS_PLACEHOLDER: &str = "Sem erros registados";

const RESULT_COLUMNS: [&str; 8] = [
    "CP_Partida",
    "Latitude_Partida",
    "Longitude_Partida",
    "CP_Chegada",
    "Latitude_Chegada",
    "Longitude_Chegada",
    "Dist_Result",
    "Tempo_Result",
];

/// 报告导出服务
///
/// 职责：
/// - 结果表：每行一个 RowResult，缺失值留空
/// - 日志表：每条一个 LogEntry；没有日志时写一行占位文本
#[derive(Debug, Default)]
pub struct ReportExporter;

impl ReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// 生成 Excel 文件内容
    pub fn export(&self, report: &BatchReport) -> AppResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        let results = workbook.add_worksheet();
        results.set_name(RESULTS_SHEET)?;
        write_results(results, report, &header)?;

        let logs = workbook.add_worksheet();
        logs.set_name(LOGS_SHEET)?;
        write_logs(logs, report, &header)?;

        debug!(
            "导出 {} 行结果, {} 条日志",
            report.results.len(),
            report.logs.len()
        );
        Ok(workbook.save_to_buffer()?)
    }

    /// 生成并写入文件
    pub async fn write_to(&self, report: &BatchReport, path: &Path) -> AppResult<()> {
        let bytes = self.export(report)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

fn write_results(sheet: &mut Worksheet, report: &BatchReport, header: &Format) -> AppResult<()> {
    for (col, name) in RESULT_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, header)?;
    }

    for (idx, result) in report.results.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, result.origin_label.as_str())?;
        write_coordinate(sheet, row, 1, result.origin)?;
        sheet.write_string(row, 3, result.destination_label.as_str())?;
        write_coordinate(sheet, row, 4, result.destination)?;
        if let Some(route) = result.route {
            sheet.write_number(row, 6, route.distance_km)?;
            sheet.write_number(row, 7, route.time_minutes)?;
        }
    }
    Ok(())
}

fn write_coordinate(sheet: &mut Worksheet, row: u32, col: u16, coordinate: Option<Coordinate>) -> AppResult<()> {
    if let Some(coordinate) = coordinate {
        sheet.write_number(row, col, coordinate.latitude)?;
        sheet.write_number(row, col + 1, coordinate.longitude)?;
    }
    Ok(())
}

fn write_logs(sheet: &mut Worksheet, report: &BatchReport, header: &Format) -> AppResult<()> {
    sheet.write_string_with_format(0, 0, "Log", header)?;

    if report.logs.is_empty() {
        sheet.write_string(1, 0, NO_ERRORS_PLACEHOLDER)?;
        return Ok(());
    }

    for (idx, entry) in report.logs.iter().enumerate() {
        sheet.write_string(idx as u32 + 1, 0, entry.message())?;
    }
    Ok(())
}
