//! Excel 输出
//!
//! 单个 sheet，六列固定顺序：
//! SEARCH_TEXT, Hanja, Meaning, Radical, RadicalMeaning, StrokeCount

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::WriteError;
use crate::models::SearchRecord;

/// 输出列及列宽
const COLUMNS: [(&str, f64); 6] = [
    ("SEARCH_TEXT", 20.0),
    ("Hanja", 20.0),
    ("Meaning", 30.0),
    ("Radical", 20.0),
    ("RadicalMeaning", 30.0),
    ("StrokeCount", 20.0),
];

/// 把有序的结果记录写成一个 xlsx 文件
pub fn write_results(path: &Path, records: &[SearchRecord]) -> Result<(), WriteError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet1")?;

    for (col, (header, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, *width)?;
        worksheet.write_string(0, col, *header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        let fields = &record.fields;
        worksheet.write_string(row, 0, &record.search_text)?;
        worksheet.write_string(row, 1, &fields.hanja)?;
        worksheet.write_string(row, 2, &fields.meaning)?;
        worksheet.write_string(row, 3, &fields.radical)?;
        worksheet.write_string(row, 4, &fields.radical_meaning)?;
        worksheet.write_string(row, 5, &fields.stroke_count)?;
    }

    workbook.save(path)?;
    info!("💾 已写出 {} 行 → {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HanjaFields, SearchRecord};
    use calamine::{open_workbook, Reader, Xlsx};
    use std::fs;
    use std::path::PathBuf;

    fn temp_xlsx(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hanja_output_{}_{}", std::process::id(), name))
    }

    fn sample_records() -> Vec<SearchRecord> {
        vec![
            SearchRecord::ok(
                "水".to_string(),
                HanjaFields {
                    hanja: "水".to_string(),
                    meaning: "물 수".to_string(),
                    radical: "水".to_string(),
                    radical_meaning: "물 수".to_string(),
                    stroke_count: "4획".to_string(),
                },
            ),
            SearchRecord::fetch_failed("火".to_string()),
        ]
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let path = temp_xlsx("rows.xlsx");
        write_results(&path, &sample_records()).expect("写出应成功");

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("读回应成功");
        let worksheets = workbook.worksheets();
        let (name, range) = worksheets.first().expect("应有一个 sheet");
        assert_eq!(name, "Sheet1");

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(
            rows[0],
            vec![
                "SEARCH_TEXT",
                "Hanja",
                "Meaning",
                "Radical",
                "RadicalMeaning",
                "StrokeCount"
            ]
        );
        assert_eq!(rows[1][0], "水");
        assert_eq!(rows[1][5], "4획");
        // 查询失败的行仍然占一行，字段为占位值
        assert_eq!(rows[2][0], "火");
        assert_eq!(rows[2][1], "표제어 없음");
        assert_eq!(rows.len(), 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn empty_record_list_still_writes_header() {
        let path = temp_xlsx("empty.xlsx");
        write_results(&path, &[]).expect("写出应成功");

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("读回应成功");
        let worksheets = workbook.worksheets();
        let (_name, range) = worksheets.first().expect("应有一个 sheet");
        assert_eq!(range.rows().count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = PathBuf::from("/nonexistent_dir/hanja_out.xlsx");
        assert!(write_results(&path, &sample_records()).is_err());
    }
}
