use crate::error::{AppResult, InputValidationError};
use crate::models::location::LocationKey;
use crate::models::row::RouteRow;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use tokio::fs;

/// 自由文本格式所需的列
pub const FREE_TEXT_COLUMNS: [&str; 2] = ["CP_Partida", "CP_Chegada"];
/// 结构化邮编格式所需的列
pub const POSTAL_CODE_COLUMNS: [&str; 6] = ["CP_Partida", "CPP1", "CPP2", "CP_Chegada", "CPC1", "CPC2"];

/// 输入表格格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    FreeText,
    PostalCode,
}

impl fmt::Display for InputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLayout::FreeText => write!(f, "自由文本"),
            InputLayout::PostalCode => write!(f, "CP4-CP3 邮编"),
        }
    }
}

/// 校验通过的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTable {
    pub layout: InputLayout,
    pub rows: Vec<RouteRow>,
}

/// 从 Excel 文件加载第一个工作表
pub async fn load_xlsx_rows(path: &Path) -> AppResult<InputTable> {
    let bytes = fs::read(path).await?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(InputValidationError::EmptyTable.into()),
    };

    let table = table_from_range(&range)?;
    tracing::info!(
        "成功加载 {} 行 ({})",
        table.rows.len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    Ok(table)
}

/// 将工作表内容转换为输入行（第一行为表头）
pub fn table_from_range(range: &Range<Data>) -> Result<InputTable, InputValidationError> {
    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell_text(cell).unwrap_or_default())
            .collect(),
        None => return Err(InputValidationError::EmptyTable),
    };
    let body: Vec<Vec<Option<String>>> = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    parse_table(&headers, &body)
}

/// 校验表头和数据并构建输入行
///
/// 顺序：空表 → 缺列 → 关键列空值。任何一项失败都不会处理任何行
pub fn parse_table(
    headers: &[String],
    rows: &[Vec<Option<String>>],
) -> Result<InputTable, InputValidationError> {
    // 保留原始数据行号（从 1 开始，不含表头），空行不影响诊断中的行号
    let rows: Vec<(usize, &Vec<Option<String>>)> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(Option::is_some))
        .map(|(idx, row)| (idx + 1, row))
        .collect();
    if rows.is_empty() {
        return Err(InputValidationError::EmptyTable);
    }

    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let has_all = |names: &[&str]| names.iter().all(|&name| column(name).is_some());

    let layout = if has_all(&POSTAL_CODE_COLUMNS[..]) {
        InputLayout::PostalCode
    } else if has_all(&FREE_TEXT_COLUMNS[..]) {
        InputLayout::FreeText
    } else {
        return Err(InputValidationError::MissingColumns(
            FREE_TEXT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        ));
    };

    let mut parsed = Vec::with_capacity(rows.len());
    for &(line, row) in &rows {
        let value = |name: &str| {
            column(name)
                .and_then(|i| row.get(i).cloned().flatten())
                .ok_or_else(|| InputValidationError::NullKeys {
                    column: name.to_string(),
                    row: line,
                })
        };

        let route_row = match layout {
            InputLayout::PostalCode => RouteRow::new(
                LocationKey::postal_code(value("CPP1")?, value("CPP2")?),
                LocationKey::postal_code(value("CPC1")?, value("CPC2")?),
            ),
            InputLayout::FreeText => RouteRow::new(
                LocationKey::free_text(value("CP_Partida")?),
                LocationKey::free_text(value("CP_Chegada")?),
            ),
        };
        parsed.push(route_row);
    }

    Ok(InputTable {
        layout,
        rows: parsed,
    })
}

/// 单元格文本；整数值的浮点数不带小数部分
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Data::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        other => Some(other.to_string()),
    }
}
