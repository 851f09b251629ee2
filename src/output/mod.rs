//! Output Format Module
//!
//! Strategy Patternによる出力フォーマットの抽象化を提供するモジュール。

mod formatters;

use std::io::Write;

use crate::api::{OutputFormat, WidthMetric};
use crate::error::SheetRenderError;

pub(crate) use formatters::*;

/// 整形済みテーブル
///
/// すべての行が列数分のセルを持ち、各セルは列幅までパディング済みです。
#[derive(Debug)]
pub(crate) struct PaddedTable<'a> {
    pub rows: &'a [Vec<String>],
    pub widths: &'a [usize],
    pub metric: WidthMetric,
}

/// 出力フォーマッター（Strategy Pattern）
#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputFormatter {
    Plain,
    Markdown,
}

impl OutputFormatter {
    /// 出力フォーマットからフォーマッターを生成
    pub fn from_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => OutputFormatter::Plain,
            OutputFormat::Markdown => OutputFormatter::Markdown,
        }
    }

    /// テーブルを指定されたフォーマットで出力する
    ///
    /// # 引数
    ///
    /// * `table` - 整形済みテーブル
    /// * `writer` - 出力先のライター
    /// * `separator` - 列区切り文字列（Plain形式で使用）
    pub fn render<W: Write>(
        &self,
        table: &PaddedTable<'_>,
        writer: &mut W,
        separator: &str,
    ) -> Result<(), SheetRenderError> {
        match self {
            OutputFormatter::Plain => PlainFormatter { separator }.render(table, writer),
            OutputFormatter::Markdown => MarkdownFormatter.render(table, writer),
        }
    }
}
