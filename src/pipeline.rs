//! Модуль верхнего уровня: преобразование всей выгрузки целиком.
//!
//! Каждая строка преобразуется независимо функцией [`crate::convert`],
//! результаты склеиваются в исходном порядке.

use tracing::{info, warn};

use crate::converter::convert;
use crate::error::Error;
use crate::types::{DestinationRecord, SourceRecord};

/// Что делать со строкой, которую не удалось разобрать (битая сумма, перевод без `" -> "`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Первая такая строка прерывает преобразование.
    #[default]
    Strict,
    /// Строка пропускается с предупреждением в логе.
    SkipInvalid,
}

/// Счётчики одного запуска.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows_read: usize,
    pub rows_converted: usize,
    /// Строки с неизвестным типом транзакции.
    pub rows_skipped: usize,
    /// Битые строки, отброшенные при [`RowPolicy::SkipInvalid`].
    pub rows_rejected: usize,
    pub records_written: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub records: Vec<DestinationRecord>,
    pub summary: Summary,
}

/// Преобразует все строки выгрузки.
///
/// ## Аргументы
///
/// * `sources` - Строки Buxfer в порядке чтения.
/// * `policy` - Поведение на битых строках ([`RowPolicy`]).
///
/// ## Возвращаемое значение
///
/// Возвращает строки ClearCheckbook вместе со счётчиками [`Summary`] или
/// [`Error::Row`] с номером первой битой строки (1-based), если `policy` равна
/// [`RowPolicy::Strict`].
///
/// # Пример
///
/// ```rust
/// use buxfer_converter::{convert_all, RowPolicy, types::SourceRecord};
///
/// let sources = vec![
///     SourceRecord::from(["2012-01-01", "Rent", "EUR", "€ 500,00", "Expense", "home", "Bank", ""]),
///     SourceRecord::from(["2012-01-02", "Split", "EUR", "€ 10,00", "Split bill", "", "Cash", ""]),
///     SourceRecord::from(["2012-01-03", "Move", "EUR", "€ 50,00", "Transfer", "", "Bank -> Cash", ""]),
/// ];
///
/// let conversion = convert_all(&sources, RowPolicy::Strict).expect("Ошибка преобразования");
/// assert_eq!(conversion.records.len(), 3);
/// assert_eq!(conversion.summary.rows_skipped, 1);
/// ```
pub fn convert_all(sources: &[SourceRecord], policy: RowPolicy) -> Result<Conversion, Error> {
    let mut records = Vec::<DestinationRecord>::new();
    let mut summary = Summary {
        rows_read: sources.len(),
        ..Summary::default()
    };

    for (index, source) in sources.iter().enumerate() {
        let number = index + 1;
        match convert(source) {
            Ok(converted) if converted.is_empty() => summary.rows_skipped += 1,
            Ok(converted) => {
                summary.rows_converted += 1;
                records.extend(converted);
            }
            Err(err) if policy == RowPolicy::SkipInvalid => {
                warn!("record {number}: {err}, skipping");
                summary.rows_rejected += 1;
            }
            Err(err) => {
                return Err(Error::Row {
                    record: number,
                    source: err,
                });
            }
        }
    }

    summary.records_written = records.len();
    info!(
        read = summary.rows_read,
        converted = summary.rows_converted,
        skipped = summary.rows_skipped,
        rejected = summary.rows_rejected,
        written = summary.records_written,
        "conversion finished"
    );
    Ok(Conversion { records, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    fn row(amount: &str, r#type: &str, account: &str) -> SourceRecord {
        SourceRecord::from(["2012-01-01", "desc", "EUR", amount, r#type, "tag", account, ""])
    }

    #[test]
    fn test_convert_all_keeps_order() {
        let sources = vec![
            row("€ 1,00", "Income", "Cash"),
            row("€ 2,00", "Transfer", "Cash -> Bank"),
            row("€ 3,00", "Expense", "Bank"),
        ];

        let got = convert_all(&sources, RowPolicy::Strict).unwrap();

        let amounts: Vec<&str> = got.records.iter().map(|r| r.amount.as_str()).collect();
        assert_eq!(amounts, ["1.00", "-2.00", "2.00", "-3.00"]);
        assert_eq!(
            got.summary,
            Summary {
                rows_read: 3,
                rows_converted: 3,
                rows_skipped: 0,
                rows_rejected: 0,
                records_written: 4,
            }
        );
    }

    #[test]
    fn test_convert_all_skips_unknown_types() {
        let sources = vec![
            row("€ 1,00", "Loan", "Cash"),
            row("€ 1,00", "Settlement", "Cash"),
            row("€ 1,00", "Expense", "Cash"),
        ];

        let got = convert_all(&sources, RowPolicy::Strict).unwrap();

        assert_eq!(got.records.len(), 1);
        assert_eq!(got.summary.rows_skipped, 2);
    }

    #[test]
    fn test_strict_policy_fails_on_bad_row() {
        let sources = vec![
            row("€ 1,00", "Income", "Cash"),
            row("€ 1,00", "Transfer", "Cash"),
        ];

        let got = convert_all(&sources, RowPolicy::Strict);

        match got {
            Err(Error::Row { record, source }) => {
                assert_eq!(record, 2);
                assert_eq!(
                    source,
                    ConvertError::MalformedTransfer {
                        account: "Cash".to_string()
                    }
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_skip_invalid_policy() {
        let sources = vec![
            row("€", "Income", "Cash"),
            row("€ 1,00", "Transfer", "Cash"),
            row("€ 4,00", "Expense", "Cash"),
        ];

        let got = convert_all(&sources, RowPolicy::SkipInvalid).unwrap();

        assert_eq!(got.records.len(), 1);
        assert_eq!(got.records[0].amount.as_str(), "-4.00");
        assert_eq!(got.summary.rows_rejected, 2);
        assert_eq!(got.summary.records_written, 1);
    }
}
