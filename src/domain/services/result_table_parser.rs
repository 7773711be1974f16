// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::result_row::ResultRow;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));
static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").expect("valid selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));

/// 一行至少需要的单元格数：序号、课程名称、课程学期、发布日期
const MIN_CELLS: usize = 4;

/// 表格扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableScan {
    /// 页面中没有指定id的表格
    MissingTable,
    /// 表格存在但没有tbody
    MissingBody,
    /// 表体中的行
    Rows {
        /// 表体中 `tr` 的总数（包括被跳过的行）
        total: usize,
        /// 至少有4个单元格的行
        rows: Vec<ResultRow>,
    },
}

/// 成绩表解析器
///
/// 按id定位表格，读取表体中每一行固定位置的单元格
pub struct ResultTableParser {
    table_id: String,
}

impl ResultTableParser {
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
        }
    }

    /// 解析HTML文档
    ///
    /// 单元格不足4个的行会被静默跳过，但其位置仍然计入行号
    pub fn parse(&self, html_content: &str) -> TableScan {
        let document = Html::parse_document(html_content);

        let table = match document
            .select(&TABLE)
            .find(|table| table.value().attr("id") == Some(self.table_id.as_str()))
        {
            Some(table) => table,
            None => return TableScan::MissingTable,
        };

        let body = match table.select(&TBODY).next() {
            Some(body) => body,
            None => return TableScan::MissingBody,
        };

        let mut total = 0;
        let mut rows = Vec::new();
        for (position, row) in body.select(&ROW).enumerate() {
            total += 1;
            let cells: Vec<ElementRef> = row.select(&CELL).collect();
            if cells.len() < MIN_CELLS {
                continue;
            }
            rows.push(ResultRow::new(
                position,
                cell_text(&cells[1]),
                cell_text(&cells[2]),
                cell_text(&cells[3]),
            ));
        }

        TableScan::Rows { total, rows }
    }
}

/// 提取单元格文本，每个文本片段去除首尾空白后拼接
fn cell_text(cell: &ElementRef) -> String {
    cell.text().map(str::trim).collect()
}

#[cfg(test)]
#[path = "result_table_parser_test.rs"]
mod tests;
