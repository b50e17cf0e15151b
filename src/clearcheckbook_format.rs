use std::io;

use crate::error::DumpError;
use crate::types::DestinationRecord;

/// Записывает строки в формате импорта ClearCheckbook.
///
/// Заголовок не пишется, строки завершаются `\r\n`, поля берутся в кавычки только
/// при необходимости.
///
/// # Ошибки
///
/// Возвращает [`DumpError`], если запись во `writer` не удалась.
///
/// # Пример
///
/// ```rust
/// use buxfer_converter::{dump_as_clearcheckbook, types::{Amount, DestinationRecord}};
///
/// let amount = Amount::from_buxfer("€ 1,50").expect("Некорректная сумма").negated();
/// let records = vec![DestinationRecord::new("2012-01-01", amount, "Groceries", "food", "Cash")];
/// let mut buffer = Vec::new();
///
/// dump_as_clearcheckbook(&mut buffer, &records).expect("Ошибка записи");
///
/// let result_string = String::from_utf8(buffer).expect("Невалидный UTF-8");
/// assert_eq!(result_string, "2012-01-01,-1.50,Groceries,,,,food,Cash\r\n");
/// ```
pub fn dump_as_clearcheckbook(
    writer: &mut impl io::Write,
    records: &[DestinationRecord],
) -> Result<(), DumpError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
