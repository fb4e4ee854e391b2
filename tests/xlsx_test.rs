mod common;

use calamine::{open_workbook, Data, Reader, Xlsx};
use common::{gps_page, orchestrator, route_json, FakeLookup, FakeRouting};
use postal_distance::error::InputValidationError;
use postal_distance::models::{load_xlsx_rows, InputLayout};
use postal_distance::services::ReportExporter;
use postal_distance::{AppError, Coordinate, LocationKey, RouteRow, TravelMode};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// 写一个只有一个工作表的输入文件；数字格式的单元格按数值写入
fn write_input(path: &Path, headers: &[&str], rows: &[Vec<&str>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).expect("写表头失败");
    }
    for (r, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            let (r, col) = (r as u32 + 1, col as u16);
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(number) => sheet.write_number(r, col, number).expect("写数字失败"),
                Err(_) => sheet.write_string(r, col, *value).expect("写文本失败"),
            };
        }
    }
    workbook.save(path).expect("保存输入文件失败");
}

#[tokio::test]
async fn test_load_postal_code_layout() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("input.xlsx");
    write_input(
        &path,
        &["CP_Partida", "CPP1", "CPP2", "CP_Chegada", "CPC1", "CPC2"],
        &[
            vec!["1000-001", "1000", "1", "4000-322", "4000", "322"],
            vec!["", "", "", "", "", ""],
            vec!["8000-100", "8000", "100", "3000", "3000", "5"],
        ],
    );

    let table = load_xlsx_rows(&path).await.expect("加载输入失败");

    assert_eq!(table.layout, InputLayout::PostalCode);
    assert_eq!(
        table.rows,
        vec![
            RouteRow::new(LocationKey::postal_code("1000", "1"), LocationKey::postal_code("4000", "322")),
            RouteRow::new(LocationKey::postal_code("8000", "100"), LocationKey::postal_code("3000", "5")),
        ]
    );
    assert_eq!(table.rows[0].origin.display_label(), "1000-001");
}

#[tokio::test]
async fn test_load_free_text_layout() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("input.xlsx");
    write_input(
        &path,
        &["CP_Partida", "CP_Chegada", "Notas"],
        &[vec!["Rua Augusta", "4000322", "x"]],
    );

    let table = load_xlsx_rows(&path).await.expect("加载输入失败");

    assert_eq!(table.layout, InputLayout::FreeText);
    assert_eq!(
        table.rows,
        vec![RouteRow::new(
            LocationKey::free_text("Rua Augusta"),
            LocationKey::free_text("4000322")
        )]
    );
}

#[tokio::test]
async fn test_load_rejects_missing_columns() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("input.xlsx");
    write_input(&path, &["CP_Partida", "Destino"], &[vec!["1000", "4000"]]);

    let result = load_xlsx_rows(&path).await;

    match result {
        Err(AppError::InputValidation(InputValidationError::MissingColumns(missing))) => {
            assert!(missing.contains(&"CP_Chegada".to_string()));
        }
        other => panic!("应该因缺列失败: {:?}", other),
    }
}

#[tokio::test]
async fn test_load_rejects_null_keys() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("input.xlsx");
    write_input(
        &path,
        &["CP_Partida", "CP_Chegada"],
        &[vec!["1000", "4000"], vec!["2000", ""]],
    );

    let result = load_xlsx_rows(&path).await;

    assert!(matches!(
        result,
        Err(AppError::InputValidation(InputValidationError::NullKeys { .. }))
    ));
}

#[tokio::test]
async fn test_load_rejects_header_only_sheet() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("input.xlsx");
    write_input(&path, &["CP_Partida", "CP_Chegada"], &[]);

    let result = load_xlsx_rows(&path).await;

    assert!(matches!(
        result,
        Err(AppError::InputValidation(InputValidationError::EmptyTable))
    ));
}

#[tokio::test]
async fn test_batch_report_written_to_file() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let output = dir.path().join("resultado.xlsx");

    let rows = vec![
        RouteRow::new(LocationKey::free_text("lisboa"), LocationKey::free_text("porto")),
        RouteRow::new(LocationKey::free_text("lisboa"), LocationKey::free_text("nenhures")),
    ];
    let lookup = FakeLookup::new()
        .page("lisboa", gps_page("38.7223", "-9.1393"))
        .page("porto", gps_page("41.1579", "-8.6291"));
    let routing = FakeRouting::new().route(
        Coordinate::new(38.7223, -9.1393),
        Coordinate::new(41.1579, -8.6291),
        route_json(313000, 11100),
    );

    let report = orchestrator(&lookup, &routing)
        .run(&rows, TravelMode::Car, None)
        .await;
    ReportExporter::new()
        .write_to(&report, &output)
        .await
        .expect("导出失败");

    let mut workbook: Xlsx<_> = open_workbook(&output).expect("打开输出失败");
    assert_eq!(workbook.sheet_names(), vec!["Coordenadas".to_string(), "Logs".to_string()]);

    let results = workbook.worksheet_range("Coordenadas").expect("读取结果表失败");
    assert_eq!(results.height(), 3);
    assert_eq!(results.get_value((1, 0)), Some(&Data::String("00lisboa".to_string())));
    assert_eq!(results.get_value((1, 6)), Some(&Data::Float(313.0)));
    assert_eq!(results.get_value((1, 7)), Some(&Data::Float(185.0)));
    assert!(matches!(
        results.get_value((2, 5)),
        None | Some(Data::Empty)
    ));

    let logs = workbook.worksheet_range("Logs").expect("读取日志表失败");
    assert_eq!(
        logs.get_value((1, 0)),
        Some(&Data::String("Sem coordenadas para nenhures".to_string()))
    );
}
