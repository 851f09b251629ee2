//! sheetrender - Column width calculation for spreadsheet tables
//!
//! This crate measures the widest value of each column in a sheet of string
//! cells (first row = header) and pads cells to those widths for fixed-width
//! text output.
//!
//! # Quick Start
//!
//! ```rust
//! use sheetrender::{max_column_width, Sheet};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sheet = Sheet::new(vec![
//!         vec!["Id", "Name"],
//!         vec!["1", "Alex"],
//!         vec!["2", "Hannah"],
//!     ]);
//!
//!     assert_eq!(max_column_width(&sheet, 0)?, 2);
//!     assert_eq!(max_column_width(&sheet, 1)?, 6);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use sheetrender::{OutputFormat, Sheet, SheetRendererBuilder, WidthMetric};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sheet = Sheet::from_json(r#"[["店舗名","Code"],["札幌店","01100"]]"#)?;
//!
//!     let renderer = SheetRendererBuilder::new()
//!         .with_width_metric(WidthMetric::Display)  // 全角文字は幅2
//!         .with_output_format(OutputFormat::Markdown)
//!         .build(sheet)?;
//!
//!     assert_eq!(renderer.column_widths()?, vec![6, 5]);
//!     println!("{}", renderer.render_to_string()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Reading a Workbook
//!
//! ```rust,no_run
//! use sheetrender::{read_sheet_from_path, SheetRenderer, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sheet = read_sheet_from_path("example.xlsx", &SheetSelector::Index(0))?;
//!     let renderer = SheetRenderer::new(sheet)?;
//!     renderer.render(std::io::stdout())?;
//!     Ok(())
//! }
//! ```

mod api;
mod builder;
mod error;
mod output;
mod reader;
mod sheet;
mod width;

// 公開API
pub use api::{OutputFormat, RaggedRows, SheetSelector, WidthMetric};
pub use builder::{SheetRenderer, SheetRendererBuilder, MAX_MIN_WIDTH};
pub use error::SheetRenderError;
pub use reader::{read_sheet, read_sheet_from_path};
pub use sheet::Sheet;
pub use width::{cell_width, max_column_width, pad_cell};
