//! Output Formatters Implementation
//!
//! 各出力フォーマットの実装を提供するモジュール。

use std::io::Write;

use super::PaddedTable;
use crate::error::SheetRenderError;
use crate::width::pad_cell;

/// Markdown区切り行の最小幅
const MARKDOWN_MIN_WIDTH: usize = 3;

/// 固定幅プレーンテキストのフォーマッター
pub(crate) struct PlainFormatter<'s> {
    pub separator: &'s str,
}

impl PlainFormatter<'_> {
    pub fn render<W: Write>(
        &self,
        table: &PaddedTable<'_>,
        writer: &mut W,
    ) -> Result<(), SheetRenderError> {
        for row in table.rows {
            let line = row.join(self.separator);
            // 最終列のパディングは出力しない
            writeln!(writer, "{}", line.trim_end())?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Markdown形式のフォーマッター
pub(crate) struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn render<W: Write>(
        &self,
        table: &PaddedTable<'_>,
        writer: &mut W,
    ) -> Result<(), SheetRenderError> {
        let widths: Vec<usize> = table
            .widths
            .iter()
            .map(|&width| width.max(MARKDOWN_MIN_WIDTH))
            .collect();

        for (row_idx, row) in table.rows.iter().enumerate() {
            write!(writer, "|")?;
            for (cell, &width) in row.iter().zip(&widths) {
                write!(writer, " {} |", pad_cell(cell, width, table.metric))?;
            }
            writeln!(writer)?;

            // 最初の行の後に区切り行を挿入
            if row_idx == 0 {
                writeln!(writer, "{}", separator_line(&widths))?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

/// ヘッダー区切り行を生成
///
/// セルの前後のスペース（各1文字）を含めて、列幅 + 2 のハイフンを出力します。
fn separator_line(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::WidthMetric;

    fn padded() -> (Vec<Vec<String>>, Vec<usize>) {
        let rows = vec![
            vec!["Id".to_string(), "Name  ".to_string()],
            vec!["1 ".to_string(), "Alex  ".to_string()],
            vec!["2 ".to_string(), "Hannah".to_string()],
        ];
        (rows, vec![2, 6])
    }

    #[test]
    fn test_plain_render() {
        let (rows, widths) = padded();
        let table = PaddedTable {
            rows: &rows,
            widths: &widths,
            metric: WidthMetric::Chars,
        };

        let mut output = Vec::new();
        PlainFormatter { separator: "  " }
            .render(&table, &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Id  Name\n1   Alex\n2   Hannah\n"
        );
    }

    #[test]
    fn test_markdown_render() {
        let (rows, widths) = padded();
        let table = PaddedTable {
            rows: &rows,
            widths: &widths,
            metric: WidthMetric::Chars,
        };

        let mut output = Vec::new();
        MarkdownFormatter.render(&table, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "| Id  | Name   |\n\
             |-----|--------|\n\
             | 1   | Alex   |\n\
             | 2   | Hannah |\n"
        );
    }

    #[test]
    fn test_separator_line() {
        assert_eq!(separator_line(&[3, 5]), "|-----|-------|");
        assert_eq!(separator_line(&[]), "|");
    }
}
