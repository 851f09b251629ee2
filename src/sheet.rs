//! Sheet Module
//!
//! ヘッダー行とデータ行からなる文字列セルのグリッドを定義するモジュール。

use serde::{Deserialize, Serialize};

use crate::error::SheetRenderError;

/// 文字列セルのグリッド
///
/// 最初の行がヘッダー、残りがデータ行です。構築後は変更できません。
/// 行の長さが揃っているか（矩形か）はここでは検証せず、
/// `SheetRenderer`の構築時に`RaggedRows`に従って扱います。
///
/// JSONでは文字列の配列の配列として表現されます。
///
/// ```rust
/// use sheetrender::Sheet;
///
/// let sheet = Sheet::new(vec![vec!["Id", "Name"], vec!["1", "Alex"]]);
/// assert_eq!(sheet.row_count(), 2);
/// assert_eq!(sheet.column_count(), 2);
/// assert_eq!(sheet.header(), Some(&["Id".to_string(), "Name".to_string()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sheet {
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// 行の列からシートを生成
    pub fn new<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// JSON（文字列の配列の配列）からシートを生成
    ///
    /// ```rust
    /// use sheetrender::Sheet;
    ///
    /// # fn main() -> Result<(), sheetrender::SheetRenderError> {
    /// let sheet = Sheet::from_json(r#"[["Id","Name"],["1","Alex"]]"#)?;
    /// assert_eq!(sheet.cell(1, 1), Some("Alex"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SheetRenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// すべての行（ヘッダーを含む）
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// ヘッダー行
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// ヘッダーを除くデータ行
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// 行数（ヘッダーを含む）
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 列数（最も長い行のセル数）
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// セルが1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// すべての行の長さが等しいかどうか
    pub fn is_rectangular(&self) -> bool {
        self.first_ragged_row().is_none()
    }

    /// 指定位置のセル
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// 指定列のセルを上から順に返す（その列を持たない行は飛ばす）
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(col).map(String::as_str))
    }

    /// ヘッダー行と長さが異なる最初の行（行インデックス, ヘッダー長, 実際の長さ）
    pub(crate) fn first_ragged_row(&self) -> Option<(usize, usize, usize)> {
        let expected = self.rows.first().map(Vec::len)?;
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| row.len() != expected)
            .map(|(idx, row)| (idx, expected, row.len()))
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for Sheet {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
