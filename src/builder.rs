//! Builder Module
//!
//! Fluent Builder APIを提供し、`SheetRenderer`インスタンスを段階的に構築する。

use std::io::Write;

use crate::api::{OutputFormat, RaggedRows, WidthMetric};
use crate::error::SheetRenderError;
use crate::output::{OutputFormatter, PaddedTable};
use crate::sheet::Sheet;
use crate::width::{pad_cell, Measure};

/// `with_min_width`で指定できる最大値
pub const MAX_MIN_WIDTH: usize = 4096;

/// 描画処理の設定を保持する内部構造体
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderConfig {
    /// セル幅の計測方式
    pub width_metric: WidthMetric,

    /// 行の長さが揃っていないシートの扱い
    pub ragged_rows: RaggedRows,

    /// すべての列に適用する最小幅
    pub min_width: usize,

    /// セル値の前後の空白を除去してから計測・出力するか
    pub trim_cells: bool,

    /// 出力フォーマット
    pub output_format: OutputFormat,

    /// 列区切り文字列（Plain形式）
    pub column_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_metric: WidthMetric::Chars,
            ragged_rows: RaggedRows::Reject,
            min_width: 0,
            trim_cells: false,
            output_format: OutputFormat::Plain,
            column_separator: "  ".to_string(),
        }
    }
}

impl RenderConfig {
    fn measure(&self) -> Measure {
        Measure {
            metric: self.width_metric,
            trim: self.trim_cells,
            min_width: self.min_width,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `SheetRenderer`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use sheetrender::{OutputFormat, Sheet, SheetRendererBuilder, WidthMetric};
///
/// # fn main() -> Result<(), sheetrender::SheetRenderError> {
/// let sheet = Sheet::new(vec![vec!["Id", "Name"], vec!["1", "Alex"]]);
/// let renderer = SheetRendererBuilder::new()
///     .with_width_metric(WidthMetric::Display)
///     .with_output_format(OutputFormat::Markdown)
///     .build(sheet)?;
/// assert_eq!(renderer.max_column_width(1)?, 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SheetRendererBuilder {
    /// 内部設定（構築中）
    config: RenderConfig,
}

impl SheetRendererBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 計測方式: 文字数
    /// - 長さの揃っていない行: エラー
    /// - 最小幅: 0
    /// - trim: しない
    /// - 出力フォーマット: プレーンテキスト（区切りは空白2つ）
    pub fn new() -> Self {
        Self::default()
    }

    /// セル幅の計測方式を指定する
    pub fn with_width_metric(mut self, metric: WidthMetric) -> Self {
        self.config.width_metric = metric;
        self
    }

    /// 行の長さが揃っていないシートの扱いを指定する
    ///
    /// ```rust
    /// use sheetrender::{RaggedRows, Sheet, SheetRendererBuilder};
    ///
    /// let sheet = Sheet::new(vec![vec!["a", "b"], vec!["c"]]);
    /// assert!(SheetRendererBuilder::new().build(sheet.clone()).is_err());
    /// assert!(SheetRendererBuilder::new()
    ///     .with_ragged_rows(RaggedRows::Tolerate)
    ///     .build(sheet)
    ///     .is_ok());
    /// ```
    pub fn with_ragged_rows(mut self, policy: RaggedRows) -> Self {
        self.config.ragged_rows = policy;
        self
    }

    /// すべての列に適用する最小幅を指定する
    ///
    /// `MAX_MIN_WIDTH`を超える値は`build()`時に`SheetRenderError::Config`になります。
    pub fn with_min_width(mut self, width: usize) -> Self {
        self.config.min_width = width;
        self
    }

    /// セル値の前後の空白を除去してから計測・出力するかを指定する
    pub fn trim_cells(mut self, trim: bool) -> Self {
        self.config.trim_cells = trim;
        self
    }

    /// 出力フォーマットを指定する
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Plain形式の列区切り文字列を指定する
    ///
    /// 空文字列や改行を含む文字列は`build()`時に`SheetRenderError::Config`になります。
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.column_separator = separator.into();
        self
    }

    /// 設定とシートを検証し、`SheetRenderer`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetRenderer)` - 設定とシートが有効な場合
    /// * `Err(SheetRenderError::Config)` - 設定が無効な場合
    /// * `Err(SheetRenderError::RaggedRow)` - `RaggedRows::Reject`でシートが矩形でない場合
    pub fn build(self, sheet: Sheet) -> Result<SheetRenderer, SheetRenderError> {
        // 1. 区切り文字列の検証
        let separator = &self.config.column_separator;
        if separator.is_empty() {
            return Err(SheetRenderError::Config(
                "Column separator must not be empty".to_string(),
            ));
        }
        if separator.contains(['\n', '\r']) {
            return Err(SheetRenderError::Config(format!(
                "Column separator must not contain line breaks: {:?}",
                separator
            )));
        }

        // 2. 最小幅の検証
        if self.config.min_width > MAX_MIN_WIDTH {
            return Err(SheetRenderError::Config(format!(
                "Minimum width {} exceeds maximum {}",
                self.config.min_width, MAX_MIN_WIDTH
            )));
        }

        // 3. シート形状の検証
        if let Some((row, expected, found)) = sheet.first_ragged_row() {
            match self.config.ragged_rows {
                RaggedRows::Reject => {
                    return Err(SheetRenderError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                RaggedRows::Tolerate => {
                    log::warn!(
                        "tolerating ragged sheet: row {} has {} cell(s), header has {}",
                        row,
                        found,
                        expected
                    );
                }
            }
        }

        log::debug!(
            "built renderer: {} row(s), {} column(s), {:?}",
            sheet.row_count(),
            sheet.column_count(),
            self.config
        );

        Ok(SheetRenderer {
            sheet,
            config: self.config,
        })
    }
}

/// シートの列幅計算と整形のファサード
///
/// ```rust
/// use sheetrender::{Sheet, SheetRenderer};
///
/// # fn main() -> Result<(), sheetrender::SheetRenderError> {
/// let sheet = Sheet::new(vec![
///     vec!["Id", "Name"],
///     vec!["1", "Alex"],
///     vec!["2", "Hannah"],
/// ]);
/// let renderer = SheetRenderer::new(sheet)?;
///
/// assert_eq!(renderer.max_column_width(0)?, 2);
/// assert_eq!(renderer.format_header()?, vec!["Id", "Name  "]);
/// assert_eq!(renderer.render_to_string()?, "Id  Name\n1   Alex\n2   Hannah\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SheetRenderer {
    sheet: Sheet,
    config: RenderConfig,
}

impl SheetRenderer {
    /// デフォルト設定でレンダラーを生成する
    ///
    /// `SheetRendererBuilder::new().build(sheet)`と同じです。
    pub fn new(sheet: Sheet) -> Result<Self, SheetRenderError> {
        SheetRendererBuilder::new().build(sheet)
    }

    /// 対象のシート
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// 指定列の最大幅（ヘッダーを含む）
    ///
    /// # 戻り値
    ///
    /// * `Ok(usize)` - 列の最大幅（最小幅の設定を含む）
    /// * `Err(SheetRenderError::EmptyInput)` - シートにセルがない場合
    /// * `Err(SheetRenderError::IndexOutOfRange)` - `column`が列数以上の場合
    pub fn max_column_width(&self, column: usize) -> Result<usize, SheetRenderError> {
        self.config.measure().column_width(&self.sheet, column)
    }

    /// 全列の幅
    pub fn column_widths(&self) -> Result<Vec<usize>, SheetRenderError> {
        self.config.measure().column_widths(&self.sheet)
    }

    /// ヘッダー行の各セルを列幅に揃えて返す
    pub fn format_header(&self) -> Result<Vec<String>, SheetRenderError> {
        let widths = self.column_widths()?;
        let header = self.sheet.header().unwrap_or(&[]);
        Ok(self.pad_row(header, &widths))
    }

    /// すべての行（ヘッダーを含む）の各セルを列幅に揃えて返す
    ///
    /// 短い行は空セルで補われ、すべての行が列数分のセルを持ちます。
    pub fn format_rows(&self) -> Result<Vec<Vec<String>>, SheetRenderError> {
        let widths = self.column_widths()?;
        Ok(self
            .sheet
            .rows()
            .iter()
            .map(|row| self.pad_row(row, &widths))
            .collect())
    }

    /// 設定された出力フォーマットでテーブルを書き出す
    pub fn render<W: Write>(&self, mut writer: W) -> Result<(), SheetRenderError> {
        let widths = self.column_widths()?;
        let rows: Vec<Vec<String>> = self
            .sheet
            .rows()
            .iter()
            .map(|row| self.pad_row(row, &widths))
            .collect();

        let table = PaddedTable {
            rows: &rows,
            widths: &widths,
            metric: self.config.width_metric,
        };

        OutputFormatter::from_format(self.config.output_format).render(
            &table,
            &mut writer,
            &self.config.column_separator,
        )
    }

    /// テーブルを文字列として返す
    pub fn render_to_string(&self) -> Result<String, SheetRenderError> {
        let mut output = Vec::new();
        self.render(&mut output)?;

        // 出力はすべてStringのセル値と区切り文字列から書かれるため、常に有効なUTF-8
        String::from_utf8(output).map_err(|e| {
            SheetRenderError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    fn pad_row(&self, row: &[String], widths: &[usize]) -> Vec<String> {
        let measure = self.config.measure();
        widths
            .iter()
            .enumerate()
            .map(|(col, &width)| {
                let value = row.get(col).map(|v| measure.text(v)).unwrap_or("");
                pad_cell(value, width, self.config.width_metric)
            })
            .collect()
    }
}
