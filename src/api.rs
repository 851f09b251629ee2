//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// セル幅の計測方式
///
/// 列幅の計算とセルのパディングの両方に使用されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum WidthMetric {
    /// 文字数（Unicodeスカラー値の数、デフォルト）
    ///
    /// 例: `"Hannah"` → 6、`"店舗名"` → 3
    #[default]
    Chars,

    /// 端末上の表示幅（`unicode-width`）
    ///
    /// 全角文字は2、半角文字は1として計算します。
    ///
    /// 例: `"店舗名"` → 6
    Display,

    /// UTF-8のバイト長
    ///
    /// 例: `"店舗名"` → 9
    Bytes,
}

/// 行の長さが揃っていないシートの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RaggedRows {
    /// ヘッダー行と長さの異なる行があればエラー（デフォルト）
    ///
    /// `SheetRenderError::RaggedRow`を返します。
    #[default]
    Reject,

    /// 短い行を許容する
    ///
    /// 存在しないセルは幅0として扱い、整形時には空セルで補います。
    /// 列数は最も長い行に合わせます。
    Tolerate,
}

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OutputFormat {
    /// 固定幅のプレーンテキスト（デフォルト）
    ///
    /// # 出力例
    ///
    /// ```text
    /// Id  Name
    /// 1   Alex
    /// 2   Hannah
    /// ```
    #[default]
    Plain,

    /// Markdownテーブル
    ///
    /// # 出力例
    ///
    /// ```markdown
    /// | Id  | Name   |
    /// |-----|--------|
    /// | 1   | Alex   |
    /// | 2   | Hannah |
    /// ```
    Markdown,
}

/// ワークブックから読み込むシートの選択方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SheetSelector {
    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Sheet1".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}
