use std::io;

use crate::error::ParseError;
use crate::types::{SOURCE_FIELDS, SourceRecord};
use crate::utils::decode_field;

/// Читает строки выгрузки Buxfer в формате CSV.
///
/// Заголовка у файла нет: первая строка считается данными. Если заголовок всё же есть,
/// его колонка TYPE (`"Type"`) не является известным типом, и конвертер его пропустит.
/// Лишние колонки в конце строки игнорируются, пустые строки пропускаются.
///
/// Поле, которое не является корректным UTF-8, читается как windows-1252
/// (в такой выгрузке `€` занимает один байт `0x80`).
///
/// # Ошибки
///
/// Возвращает [`ParseError`], если:
/// * В строке меньше восьми полей.
/// * Данные не являются корректным CSV или возникла ошибка ввода-вывода.
///
/// # Пример
///
/// ```rust
/// use buxfer_converter::parse_from_buxfer;
///
/// let data = "2012-01-01,Groceries,EUR,\"€ 1,50\",Expense,food,Cash,cleared\n";
/// let mut reader = data.as_bytes();
///
/// let records = parse_from_buxfer(&mut reader).expect("Ошибка парсинга");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].amount, "€ 1,50");
/// ```
pub fn parse_from_buxfer(reader: &mut impl io::Read) -> Result<Vec<SourceRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut result = Vec::<SourceRecord>::new();
    for (index, row) in csv_reader.byte_records().enumerate() {
        result.push(parse_record(index + 1, &row?)?);
    }
    Ok(result)
}

fn parse_record(number: usize, row: &csv::ByteRecord) -> Result<SourceRecord, ParseError> {
    if row.len() < SOURCE_FIELDS {
        return Err(ParseError::InvalidFormat {
            record: number,
            message: format!("invalid fields count: {}", row.len()),
        });
    }

    let field = |i: usize| decode_field(&row[i]);
    Ok(SourceRecord {
        date: field(0),
        description: field(1),
        currency: field(2),
        amount: field(3),
        r#type: field(4),
        tags: field(5),
        account: field(6),
        status: field(7),
    })
}
