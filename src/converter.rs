//! Преобразование одной строки Buxfer в строки ClearCheckbook.

use tracing::debug;

use crate::error::ConvertError;
use crate::types::{Amount, DestinationRecord, SourceRecord, TxType};
use crate::utils::{last_tag, split_accounts};

/// Преобразует строку выгрузки Buxfer в ноль, одну или две строки ClearCheckbook.
///
/// * `Income` и `Expense` дают одну строку; у расхода сумма отрицательная.
/// * `Transfer` даёт две строки: сначала списание со счёта-источника,
///   затем зачисление на счёт-получатель.
/// * Любой другой тип (`Settlement`, `Loan`, ...) пропускается: `Ok` с пустым вектором.
///
/// Категорией становится последний тег из поля TAGS.
///
/// # Ошибки
///
/// Возвращает [`ConvertError`], если сумма или поле счёта перевода имеют неверный формат.
///
/// # Пример
///
/// ```rust
/// use buxfer_converter::{convert, types::SourceRecord};
///
/// let record = SourceRecord::from([
///     "2012-01-01", "Groceries", "USD", "€ 1,50", "Expense", "food", "Cash", "cleared",
/// ]);
///
/// let got = convert(&record).expect("Ошибка преобразования");
/// assert_eq!(got.len(), 1);
/// assert_eq!(got[0].amount.as_str(), "-1.50");
/// ```
pub fn convert(record: &SourceRecord) -> Result<Vec<DestinationRecord>, ConvertError> {
    let tx_type = match record.r#type.parse::<TxType>() {
        Ok(tx_type) => tx_type,
        Err(err) => {
            debug!(date = %record.date, description = %record.description, "skipping row: {err}");
            return Ok(Vec::new());
        }
    };

    let category = last_tag(&record.tags);

    match tx_type {
        TxType::Transfer => split_transfer(record, category),
        TxType::Deposit => {
            let amount = Amount::from_buxfer(&record.amount)?;
            Ok(vec![single(record, amount, category)])
        }
        TxType::Withdrawal => {
            let amount = Amount::from_buxfer(&record.amount)?.negated();
            Ok(vec![single(record, amount, category)])
        }
    }
}

fn single(record: &SourceRecord, amount: Amount, category: &str) -> DestinationRecord {
    DestinationRecord::new(
        &record.date,
        amount,
        &record.description,
        category,
        &record.account,
    )
}

fn split_transfer(
    record: &SourceRecord,
    category: &str,
) -> Result<Vec<DestinationRecord>, ConvertError> {
    let Some((from, to)) = split_accounts(&record.account) else {
        return Err(ConvertError::MalformedTransfer {
            account: record.account.clone(),
        });
    };
    let magnitude = Amount::from_buxfer(&record.amount)?;

    let debit = DestinationRecord::new(
        &record.date,
        magnitude.negated(),
        &record.description,
        category,
        from,
    );
    let credit = DestinationRecord::new(
        &record.date,
        magnitude,
        &record.description,
        category,
        to,
    );
    Ok(vec![debit, credit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn source(amount: &str, r#type: &str, tags: &str, account: &str) -> SourceRecord {
        SourceRecord::from([
            "2012-01-01",
            "Groceries",
            "USD",
            amount,
            r#type,
            tags,
            account,
            "cleared",
        ])
    }

    fn fields(record: &DestinationRecord) -> [&str; 8] {
        [
            record.date.as_str(),
            record.amount.as_str(),
            record.description.as_str(),
            record.memo.as_str(),
            record.payee.as_str(),
            record.check_number.as_str(),
            record.category.as_str(),
            record.account.as_str(),
        ]
    }

    #[test]
    fn test_convert_expense() {
        let got = convert(&source("€ 1,50", "Expense", "food", "Cash")).unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(
            fields(&got[0]),
            ["2012-01-01", "-1.50", "Groceries", "", "", "", "food", "Cash"]
        );
    }

    #[test]
    fn test_convert_income() {
        let got = convert(&source("€ 2.500,00", "Income", "salary", "Bank")).unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].amount.as_str(), "2500.00");
        assert_eq!(got[0].account, "Bank");
        assert_eq!(got[0].category, "salary");
    }

    #[test]
    fn test_convert_transfer() {
        let got = convert(&source("€ 100,00", "Transfer", "", "Cash -> Savings")).unwrap();

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].account, "Cash");
        assert_eq!(got[0].amount.as_str(), "-100.00");
        assert_eq!(got[1].account, "Savings");
        assert_eq!(got[1].amount.as_str(), "100.00");

        for leg in &got {
            assert_eq!(leg.date, "2012-01-01");
            assert_eq!(leg.description, "Groceries");
            assert_eq!(leg.category, "");
        }
    }

    #[test]
    fn test_transfer_legs_sum_to_zero() {
        for amount in ["€ 0,01", "€ 1.000,00", "$ 42", "€ 3,14159"] {
            let got = convert(&source(amount, "Transfer", "x", "A -> B")).unwrap();
            let sum: Decimal = got
                .iter()
                .map(|r| Decimal::from_str(r.amount.as_str()).unwrap())
                .sum();

            assert_eq!(sum, Decimal::ZERO, "{amount}");
            assert_eq!(got[0].account, "A");
            assert_eq!(got[1].account, "B");
        }
    }

    #[test]
    fn test_skip_unknown_types() {
        for r#type in ["Settlement", "Paid for friend", "Split bill", "Loan", "Type"] {
            let got = convert(&source("€ 1,50", r#type, "food", "Cash"));
            assert_eq!(got, Ok(Vec::new()), "{}", r#type);
        }
    }

    #[test]
    fn test_skip_unknown_type_ignores_bad_amount() {
        let got = convert(&source("garbage", "Loan", "", "Cash -> Savings"));
        assert_eq!(got, Ok(Vec::new()));
    }

    #[test]
    fn test_category_from_last_tag() {
        let got = convert(&source("€ 1,50", "Expense", "food,travel", "Cash")).unwrap();
        assert_eq!(got[0].category, "travel");

        let got = convert(&source("€ 1,50", "Transfer", "a,b", "Cash -> Bank")).unwrap();
        assert!(got.iter().all(|r| r.category == "b"));
    }

    #[test]
    fn test_withdrawal_sign() {
        for amount in ["€ 0,00", "€ 1,00", "$ 12.345,67"] {
            let expense = convert(&source(amount, "Expense", "", "Cash")).unwrap();
            let income = convert(&source(amount, "Income", "", "Cash")).unwrap();

            assert!(expense[0].amount.as_str().starts_with('-'));
            assert!(!income[0].amount.as_str().starts_with('-'));
        }
    }

    #[test]
    fn test_convert_is_repeatable() {
        let record = source("€ 9,99", "Transfer", "t", "Cash -> Bank");
        assert_eq!(convert(&record), convert(&record));
    }

    #[test]
    fn test_malformed_transfer() {
        let got = convert(&source("€ 1,00", "Transfer", "", "Cash"));
        assert_eq!(
            got,
            Err(ConvertError::MalformedTransfer {
                account: "Cash".to_string()
            })
        );
    }

    #[test]
    fn test_bad_amount() {
        let got = convert(&source("€", "Expense", "", "Cash"));
        assert!(matches!(got, Err(ConvertError::AmountTooShort { .. })));

        let got = convert(&source("€ x", "Income", "", "Cash"));
        assert!(matches!(got, Err(ConvertError::InvalidAmount { .. })));
    }
}
