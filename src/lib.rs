//! # buxfer_converter
//!
//! Библиотека для преобразования CSV-выгрузки Buxfer в CSV-файл импорта ClearCheckbook.
//!
//! Схемы обоих файлов фиксированы:
//! * **Buxfer**: DATE, DESCRIPTION, CURRENCY, AMOUNT, TYPE, TAGS, ACCOUNT, STATUS
//! * **ClearCheckbook**: DATE, AMOUNT, DESCRIPTION, MEMO, PAYEE, CHECK_NUMBER, CATEGORY, ACCOUNT
//!
//! Преобразуются типы `Income`, `Expense` и `Transfer`; переводы разбиваются на две строки.
//! Остальные типы (`Settlement`, `Paid for friend`, `Split bill`, `Loan`) пропускаются.
//! Из нескольких тегов категорией становится последний.
//!
//! ## Быстрый старт
//!
//! ```rust
//! use buxfer_converter::{convert_all, dump_as_clearcheckbook, parse_from_buxfer, RowPolicy};
//!
//! let data = "2012-01-01,Groceries,EUR,\"€ 1,50\",Expense,food,Cash,cleared\n\
//!             2012-01-02,Savings,EUR,\"€ 100,00\",Transfer,,Cash -> Savings,cleared\n";
//! let mut reader = data.as_bytes();
//!
//! let mut writer = Vec::new();
//!
//! let sources = parse_from_buxfer(&mut reader).expect("Ошибка парсинга");
//! let conversion = convert_all(&sources, RowPolicy::Strict).expect("Ошибка преобразования");
//! dump_as_clearcheckbook(&mut writer, &conversion.records).expect("Ошибка записи");
//!
//! assert_eq!(
//!     String::from_utf8(writer).unwrap(),
//!     "2012-01-01,-1.50,Groceries,,,,food,Cash\r\n\
//!      2012-01-02,-100.00,Savings,,,,,Cash\r\n\
//!      2012-01-02,100.00,Savings,,,,,Savings\r\n"
//! );
//! ```
//!
//! ## Обработка ошибок
//! Строки с неизвестным типом ошибкой не считаются. Битые строки дают [`error::ConvertError`];
//! что с ними делать, решает [`RowPolicy`]. Чтение и запись возвращают
//! [`error::ParseError`] и [`error::DumpError`].

pub mod error;
pub mod types;

mod buxfer_format;
mod clearcheckbook_format;
mod converter;
mod pipeline;
mod utils;

pub use buxfer_format::parse_from_buxfer;

pub use clearcheckbook_format::dump_as_clearcheckbook;

pub use converter::convert;

pub use pipeline::{Conversion, RowPolicy, Summary, convert_all};
