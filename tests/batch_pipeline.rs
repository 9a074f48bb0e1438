//! 不依赖浏览器的流水线测试：
//! 读取 → 逐词处理（注入查询步骤） → 写出，验证顺序保证与文件级隔离

use std::fs;
use std::path::PathBuf;

use calamine::{open_workbook, Reader, Xlsx};
use hanja_batch_search::io::{input, output};
use hanja_batch_search::orchestrator::unit_runner::{collect_records, process_unit};
use hanja_batch_search::{BatchUnit, FetchStatus, HanjaFields};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hanja_pipeline_{}_{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("创建测试目录失败");
    dir
}

fn fields_for(term: &str) -> HanjaFields {
    HanjaFields {
        hanja: term.to_string(),
        meaning: format!("{} 훈음", term),
        radical: "水".to_string(),
        radical_meaning: "물 수".to_string(),
        stroke_count: "4획".to_string(),
    }
}

fn read_rows(path: &PathBuf) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("读回输出文件失败");
    let worksheets = workbook.worksheets();
    let (_name, range) = worksheets.first().expect("应有一个 sheet");
    range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[tokio::test]
async fn csv_to_xlsx_drops_empty_rows_and_keeps_order() {
    let dir = temp_dir("order");
    let input_path = dir.join("terms.csv");
    fs::write(&input_path, "SEARCH_TEXT\n甲\n\n乙\n").unwrap();

    // 输入三行，其中一行为空：只有两个有效检索词
    let terms = input::load_search_terms(&input_path).expect("读取应成功");
    assert_eq!(terms, vec!["甲".to_string(), "乙".to_string()]);

    let records = collect_records(terms, |term| async move { Ok(fields_for(&term)) }).await;

    let output_path = dir.join("terms.xlsx");
    output::write_results(&output_path, &records).expect("写出应成功");

    let rows = read_rows(&output_path);
    assert_eq!(rows.len(), 3); // 表头 + 2 行
    assert_eq!(rows[1][0], "甲");
    assert_eq!(rows[2][0], "乙");

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn write_failure_in_one_unit_leaves_other_unit_intact() {
    let dir = temp_dir("isolation");
    let good_input = dir.join("good.csv");
    let bad_input = dir.join("bad.csv");
    fs::write(&good_input, "SEARCH_TEXT\n水\n").unwrap();
    fs::write(&bad_input, "SEARCH_TEXT\n火\n").unwrap();

    let units = [
        // 第一个单元写到不存在的目录，必然失败
        BatchUnit {
            input_path: bad_input,
            output_path: PathBuf::from("/nonexistent_dir/bad.xlsx"),
        },
        BatchUnit {
            input_path: good_input,
            output_path: dir.join("good.xlsx"),
        },
    ];

    let mut outcomes = Vec::new();
    for (idx, unit) in units.iter().enumerate() {
        let result =
            process_unit(unit, idx + 1, |term| async move { Ok(fields_for(&term)) }).await;
        outcomes.push(result);
    }

    assert!(outcomes[0].is_err(), "坏单元应失败");
    assert_eq!(outcomes[1].as_ref().ok(), Some(&1));
    let rows = read_rows(&dir.join("good.xlsx"));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "水");

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn unit_without_valid_rows_fails_but_sibling_still_writes() {
    let dir = temp_dir("empty_unit");
    let empty_input = dir.join("empty.csv");
    let good_input = dir.join("good.csv");
    // 只有空白 SEARCH_TEXT 的文件：0 个有效检索词
    fs::write(&empty_input, "SEARCH_TEXT,Note\n ,blank\n  ,blank\n").unwrap();
    fs::write(&good_input, "SEARCH_TEXT\n乙\n").unwrap();

    let empty_unit = BatchUnit {
        input_path: empty_input,
        output_path: dir.join("empty.xlsx"),
    };
    let good_unit = BatchUnit {
        input_path: good_input,
        output_path: dir.join("good.xlsx"),
    };

    let empty_result =
        process_unit(&empty_unit, 1, |term| async move { Ok(fields_for(&term)) }).await;
    let good_result =
        process_unit(&good_unit, 2, |term| async move { Ok(fields_for(&term)) }).await;

    assert!(empty_result.is_err(), "没有有效行的单元应上报失败");
    assert!(!empty_unit.output_path.exists(), "失败单元不应产生输出文件");

    assert_eq!(good_result.ok(), Some(1));
    let rows = read_rows(&dir.join("good.xlsx"));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "乙");

    let _ = fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn failed_fetch_rows_reach_the_output_as_placeholders() {
    let dir = temp_dir("placeholder");
    let input_path = dir.join("terms.csv");
    fs::write(&input_path, "SEARCH_TEXT\n甲\n乙\n丙\n").unwrap();

    let terms = input::load_search_terms(&input_path).expect("读取应成功");
    let records = collect_records(terms, |term| async move {
        if term == "乙" {
            Err(hanja_batch_search::FetchError::Timeout {
                url: "http://test".to_string(),
                timeout_secs: 1,
            })
        } else {
            Ok(fields_for(&term))
        }
    })
    .await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].status, FetchStatus::FetchFailed);

    let output_path = dir.join("terms.xlsx");
    output::write_results(&output_path, &records).expect("写出应成功");

    let rows = read_rows(&output_path);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2][0], "乙");
    assert_eq!(rows[2][1], "표제어 없음");
    assert_eq!(rows[3][0], "丙");

    let _ = fs::remove_dir_all(&dir);
}
