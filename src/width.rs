//! Width Module
//!
//! セル幅の計測と列幅の計算を提供するモジュール。

use unicode_width::UnicodeWidthStr;

use crate::api::WidthMetric;
use crate::error::SheetRenderError;
use crate::sheet::Sheet;

/// 1つのセル値の幅を計測する
///
/// ```rust
/// use sheetrender::{cell_width, WidthMetric};
///
/// assert_eq!(cell_width("Hannah", WidthMetric::Chars), 6);
/// assert_eq!(cell_width("店舗名", WidthMetric::Chars), 3);
/// assert_eq!(cell_width("店舗名", WidthMetric::Display), 6);
/// assert_eq!(cell_width("店舗名", WidthMetric::Bytes), 9);
/// ```
pub fn cell_width(value: &str, metric: WidthMetric) -> usize {
    match metric {
        WidthMetric::Chars => value.chars().count(),
        WidthMetric::Display => value.width(),
        WidthMetric::Bytes => value.len(),
    }
}

/// 指定列の最大幅（ヘッダーを含むすべての行のうち最も長いセル値の文字数）
///
/// 文字数（`WidthMetric::Chars`）で計測し、セル値はtrimしません。
/// 指定列を持たない短い行は幅0として扱います。計測方式やシート形状の検証を
/// 変更する場合は`SheetRendererBuilder`を使用してください。
///
/// # 戻り値
///
/// * `Ok(usize)` - 列の最大幅
/// * `Err(SheetRenderError::EmptyInput)` - シートにセルがない場合
/// * `Err(SheetRenderError::IndexOutOfRange)` - `column`が列数以上の場合
///
/// # 使用例
///
/// ```rust
/// use sheetrender::{max_column_width, Sheet};
///
/// # fn main() -> Result<(), sheetrender::SheetRenderError> {
/// let sheet = Sheet::new(vec![
///     vec!["Id", "Name"],
///     vec!["1", "Alex"],
///     vec!["2", "Hannah"],
/// ]);
///
/// assert_eq!(max_column_width(&sheet, 0)?, 2);
/// assert_eq!(max_column_width(&sheet, 1)?, 6);
/// # Ok(())
/// # }
/// ```
pub fn max_column_width(sheet: &Sheet, column: usize) -> Result<usize, SheetRenderError> {
    Measure::default().column_width(sheet, column)
}

/// 値を右側に空白で埋めて`width`に揃える
///
/// 値がすでに`width`以上の場合はそのまま返します（切り詰めはしません）。
///
/// ```rust
/// use sheetrender::{pad_cell, WidthMetric};
///
/// assert_eq!(pad_cell("Id", 4, WidthMetric::Chars), "Id  ");
/// assert_eq!(pad_cell("Hannah", 4, WidthMetric::Chars), "Hannah");
/// assert_eq!(pad_cell("店", 4, WidthMetric::Display), "店  ");
/// ```
pub fn pad_cell(value: &str, width: usize, metric: WidthMetric) -> String {
    let current = cell_width(value, metric);
    let mut padded = String::with_capacity(value.len() + width.saturating_sub(current));
    padded.push_str(value);
    for _ in current..width {
        padded.push(' ');
    }
    padded
}

/// 計測設定（計測方式、trim、最小幅）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Measure {
    pub metric: WidthMetric,
    pub trim: bool,
    pub min_width: usize,
}

impl Measure {
    /// 計測・出力の対象となるテキスト
    pub fn text<'a>(&self, value: &'a str) -> &'a str {
        if self.trim {
            value.trim()
        } else {
            value
        }
    }

    /// セル値の幅
    pub fn width(&self, value: &str) -> usize {
        cell_width(self.text(value), self.metric)
    }

    /// 1列分の幅を計算
    pub fn column_width(&self, sheet: &Sheet, column: usize) -> Result<usize, SheetRenderError> {
        let columns = Self::checked_column_count(sheet)?;
        if column >= columns {
            return Err(SheetRenderError::IndexOutOfRange {
                index: column,
                columns,
            });
        }

        let width = sheet
            .column(column)
            .map(|value| self.width(value))
            .fold(self.min_width, usize::max);

        log::trace!("column {} width {}", column, width);
        Ok(width)
    }

    /// 全列の幅を計算
    ///
    /// すべての行を1回ずつ走査し、列ごとの最大幅を返します。
    pub fn column_widths(&self, sheet: &Sheet) -> Result<Vec<usize>, SheetRenderError> {
        let columns = Self::checked_column_count(sheet)?;
        let mut widths = vec![self.min_width; columns];

        for row in sheet.rows() {
            for (col_idx, value) in row.iter().enumerate() {
                widths[col_idx] = widths[col_idx].max(self.width(value));
            }
        }

        log::trace!("column widths {:?}", widths);
        Ok(widths)
    }

    fn checked_column_count(sheet: &Sheet) -> Result<usize, SheetRenderError> {
        if sheet.is_empty() {
            return Err(SheetRenderError::EmptyInput);
        }
        Ok(sheet.column_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Sheet {
        Sheet::new(vec![
            vec!["Id", "Name"],
            vec!["1", "Alex"],
            vec!["2", "Hannah"],
        ])
    }

    #[test]
    fn test_max_column_width_header_wins() {
        assert_eq!(max_column_width(&people(), 0).unwrap(), 2);
    }

    #[test]
    fn test_max_column_width_data_wins() {
        assert_eq!(max_column_width(&people(), 1).unwrap(), 6);
    }

    #[test]
    fn test_max_column_width_is_idempotent() {
        let sheet = people();
        let first = max_column_width(&sheet, 1).unwrap();
        let second = max_column_width(&sheet, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_header_only_sheet() {
        let sheet = Sheet::new(vec![vec!["Identifier", "N"]]);
        assert_eq!(max_column_width(&sheet, 0).unwrap(), 10);
        assert_eq!(max_column_width(&sheet, 1).unwrap(), 1);
    }

    #[test]
    fn test_out_of_range_column() {
        match max_column_width(&people(), 2) {
            Err(SheetRenderError::IndexOutOfRange { index, columns }) => {
                assert_eq!(index, 2);
                assert_eq!(columns, 2);
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_sheet() {
        assert!(matches!(
            max_column_width(&Sheet::default(), 0),
            Err(SheetRenderError::EmptyInput)
        ));
        assert!(matches!(
            max_column_width(&Sheet::new(vec![Vec::<String>::new()]), 0),
            Err(SheetRenderError::EmptyInput)
        ));
    }

    #[test]
    fn test_empty_strings_have_zero_width() {
        let sheet = Sheet::new(vec![vec!["", ""], vec!["", "x"]]);
        assert_eq!(max_column_width(&sheet, 0).unwrap(), 0);
        assert_eq!(max_column_width(&sheet, 1).unwrap(), 1);
    }

    #[test]
    fn test_chars_counts_scalar_values() {
        let sheet = Sheet::new(vec![vec!["市区町村コード"], vec!["01100"]]);
        assert_eq!(max_column_width(&sheet, 0).unwrap(), 7);
    }

    #[test]
    fn test_measure_display_width() {
        let measure = Measure {
            metric: WidthMetric::Display,
            ..Default::default()
        };
        let sheet = Sheet::new(vec![
            vec!["市区町村コード", "店舗名"],
            vec!["01100", "札幌店"],
        ]);
        assert_eq!(measure.column_widths(&sheet).unwrap(), vec![14, 6]);
    }

    #[test]
    fn test_measure_trim_and_min_width() {
        let measure = Measure {
            trim: true,
            min_width: 3,
            ..Default::default()
        };
        let sheet = Sheet::new(vec![vec!["  Header1  ", "a"], vec!["Data1", "b"]]);
        assert_eq!(measure.column_widths(&sheet).unwrap(), vec![7, 3]);
        assert_eq!(measure.column_width(&sheet, 0).unwrap(), 7);
    }

    #[test]
    fn test_column_widths_agree_with_single_column() {
        let sheet = people();
        let measure = Measure::default();
        let widths = measure.column_widths(&sheet).unwrap();
        for (col, width) in widths.iter().enumerate() {
            assert_eq!(*width, measure.column_width(&sheet, col).unwrap());
        }
    }

    #[test]
    fn test_short_rows_contribute_zero() {
        let sheet = Sheet::new(vec![vec!["a", "bb"], vec!["ccc"]]);
        assert_eq!(max_column_width(&sheet, 1).unwrap(), 2);
        assert_eq!(Measure::default().column_widths(&sheet).unwrap(), vec![3, 2]);
    }

    #[test]
    fn test_pad_cell() {
        assert_eq!(pad_cell("", 3, WidthMetric::Chars), "   ");
        assert_eq!(pad_cell("abc", 3, WidthMetric::Chars), "abc");
        assert_eq!(pad_cell("日本", 5, WidthMetric::Display), "日本 ");
        assert_eq!(pad_cell("日本", 5, WidthMetric::Chars), "日本   ");
    }

    #[test]
    fn test_display_width_calculation() {
        assert_eq!(cell_width("日本語", WidthMetric::Display), 6);
        assert_eq!(cell_width("ABC", WidthMetric::Display), 3);
        assert_eq!(cell_width("日本ABC", WidthMetric::Display), 7);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn rectangular_sheet() -> impl Strategy<Value = Vec<Vec<String>>> {
            (1usize..6, 1usize..8).prop_flat_map(|(cols, rows)| {
                prop::collection::vec(prop::collection::vec(".{0,12}", cols), rows)
            })
        }

        proptest! {
            #[test]
            fn test_width_is_longest_cell(rows in rectangular_sheet(), pick in any::<prop::sample::Index>()) {
                let sheet = Sheet::new(rows.clone());
                let column = pick.index(rows[0].len());
                let expected = rows.iter().map(|row| row[column].chars().count()).max().unwrap();

                prop_assert_eq!(max_column_width(&sheet, column).unwrap(), expected);
            }

            #[test]
            fn test_padded_cells_reach_width(value in ".{0,12}", width in 0usize..20) {
                let padded = pad_cell(&value, width, WidthMetric::Chars);
                prop_assert_eq!(
                    cell_width(&padded, WidthMetric::Chars),
                    width.max(value.chars().count())
                );
                prop_assert!(padded.starts_with(value.as_str()));
            }
        }
    }
}
