//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// sheetrenderクレート全体で使用するエラー型
///
/// 列幅の計算、セルの整形、テーブル出力、シートの読み込み中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # 使用例
///
/// ```rust
/// use sheetrender::{max_column_width, Sheet, SheetRenderError};
///
/// let sheet = Sheet::new(vec![vec!["Id", "Name"]]);
///
/// match max_column_width(&sheet, 5) {
///     Err(SheetRenderError::IndexOutOfRange { index, columns }) => {
///         assert_eq!(index, 5);
///         assert_eq!(columns, 2);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SheetRenderError {
    /// 列インデックスが範囲外
    ///
    /// `index`は要求された列、`columns`はシートの列数です。
    #[error("Column index {index} out of range: sheet has {columns} column(s)")]
    IndexOutOfRange {
        /// 要求された列インデックス（0始まり）
        index: usize,
        /// シートの列数
        columns: usize,
    },

    /// 空のシート（行がない、またはすべての行が空）
    #[error("Empty input: sheet has no cells")]
    EmptyInput,

    /// 行の長さがヘッダー行と一致しない
    ///
    /// `RaggedRows::Reject`（デフォルト）のときにのみ発生します。
    #[error("Ragged row {row}: expected {expected} cell(s), found {found}")]
    RaggedRow {
        /// 問題のある行インデックス（0始まり、ヘッダーは0）
        row: usize,
        /// ヘッダー行のセル数
        expected: usize,
        /// 実際のセル数
        found: usize,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `SheetRendererBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O操作中に発生したエラー
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON入力の解析エラー
    #[error("Failed to parse JSON sheet: {0}")]
    Json(#[from] serde_json::Error),

    /// ワークブックの解析中に発生したエラー（calamine由来）
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// 指定されたシートがワークブックに存在しない
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}
