//! Reader Module
//!
//! calamineを使用してワークブックの1シートを`Sheet`として読み込むモジュール。

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Reader};
use chrono::NaiveTime;

use crate::api::SheetSelector;
use crate::error::SheetRenderError;
use crate::sheet::Sheet;

/// 日付として扱うシリアル値の上限（10000-01-01、1900年システム）
const MAX_DATE_SERIAL: f64 = 2_958_466.0;

/// ワークブックから1シートを読み込む
///
/// calamineが扱える形式（XLSX / XLS / ODS など）を受け付けます。
/// 読み込み範囲はワークシートの使用範囲で、結果のシートは常に矩形です。
///
/// # 引数
///
/// * `reader` - ワークブックを読み込むためのリーダー（Read + Seekトレイトを実装）
/// * `selector` - 読み込むシートの選択方式
///
/// # 戻り値
///
/// * `Ok(Sheet)` - 読み込みに成功した場合
/// * `Err(SheetRenderError::Parse)` - ワークブックの解析に失敗した場合
/// * `Err(SheetRenderError::SheetNotFound)` - 指定されたシートが存在しない場合
///
/// # 使用例
///
/// ```rust,no_run
/// use std::fs::File;
/// use sheetrender::{read_sheet, SheetRenderer, SheetSelector};
///
/// # fn main() -> Result<(), sheetrender::SheetRenderError> {
/// let input = File::open("people.xlsx")?;
/// let sheet = read_sheet(input, &SheetSelector::Name("People".to_string()))?;
/// let renderer = SheetRenderer::new(sheet)?;
/// println!("{}", renderer.max_column_width(0)?);
/// # Ok(())
/// # }
/// ```
pub fn read_sheet<R: Read + Seek>(
    mut reader: R,
    selector: &SheetSelector,
) -> Result<Sheet, SheetRenderError> {
    // calamineはClone可能なリーダーを要求するため、メモリに読み込む
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match selector {
        SheetSelector::Index(index) => sheet_names
            .get(*index)
            .cloned()
            .ok_or_else(|| SheetRenderError::SheetNotFound(format!("index {}", index)))?,
        SheetSelector::Name(name) => sheet_names
            .iter()
            .find(|candidate| *candidate == name)
            .cloned()
            .ok_or_else(|| SheetRenderError::SheetNotFound(name.clone()))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let sheet: Sheet = range
        .rows()
        .map(|row| row.iter().map(format_cell).collect::<Vec<String>>())
        .collect();

    log::debug!(
        "read sheet '{}': {} row(s), {} column(s)",
        sheet_name,
        sheet.row_count(),
        sheet.column_count()
    );

    Ok(sheet)
}

/// ファイルパスからワークブックを開き、1シートを読み込む
pub fn read_sheet_from_path<P: AsRef<Path>>(
    path: P,
    selector: &SheetSelector,
) -> Result<Sheet, SheetRenderError> {
    let file = File::open(path)?;
    read_sheet(BufReader::new(file), selector)
}

/// セル値を表示文字列に変換
fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}

/// 日時セルをISO 8601形式に変換
///
/// 時刻部分がない場合は日付のみ（`%Y-%m-%d`）を出力します。
/// エポック（1900年 / 1904年システム）と1900年うるう年バグの補正はcalamineに任せます。
/// 期間値や日付の範囲外の値はシリアル値のまま出力します。
fn format_datetime(dt: &ExcelDateTime) -> String {
    let serial = dt.as_f64();
    if dt.is_duration() || !(0.0..MAX_DATE_SERIAL).contains(&serial) {
        return serial.to_string();
    }

    match dt.as_datetime() {
        Some(datetime) if datetime.time() == NaiveTime::MIN => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}
