use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{ConvertError, UnknownTxType};

/// Количество полей в строке выгрузки Buxfer.
pub const SOURCE_FIELDS: usize = 8;

/// Ширина префикса валюты в начале суммы Buxfer. Всегда ровно два символа,
/// независимо от того, какой символ валюты стоит в выгрузке.
pub const CURRENCY_PREFIX_LEN: usize = 2;

/// Разделитель счетов в поле ACCOUNT у переводов: `"FROM -> TO"`.
pub const TRANSFER_DELIMITER: &str = " -> ";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TxType {
    Deposit,
    Transfer,
    Withdrawal,
}

impl FromStr for TxType {
    type Err = UnknownTxType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(TxType::Deposit),
            "Transfer" => Ok(TxType::Transfer),
            "Expense" => Ok(TxType::Withdrawal),
            _ => Err(UnknownTxType(s.to_string())),
        }
    }
}

/// Строка выгрузки Buxfer.
///
/// Порядок полей в файле: DATE, DESCRIPTION, CURRENCY, AMOUNT, TYPE, TAGS, ACCOUNT, STATUS.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SourceRecord {
    pub date: String,
    pub description: String,
    pub currency: String,
    pub amount: String,
    pub r#type: String,
    pub tags: String,
    pub account: String,
    pub status: String,
}

impl From<[&str; SOURCE_FIELDS]> for SourceRecord {
    fn from(fields: [&str; SOURCE_FIELDS]) -> Self {
        let [date, description, currency, amount, r#type, tags, account, status] =
            fields.map(str::to_string);
        SourceRecord {
            date,
            description,
            currency,
            amount,
            r#type,
            tags,
            account,
            status,
        }
    }
}

/// Сумма в каноническом виде: точка как десятичный разделитель,
/// без разделителя тысяч и без префикса валюты.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    /// Нормализует сумму из выгрузки Buxfer в неотрицательную величину.
    ///
    /// Первые [`CURRENCY_PREFIX_LEN`] символов отбрасываются, все `.` удаляются,
    /// `,` заменяется на `.`. Масштаб сохраняется как есть: `"€ 100,00"` даёт `"100.00"`.
    ///
    /// # Ошибки
    ///
    /// * [`ConvertError::AmountTooShort`], если после префикса ничего не осталось.
    /// * [`ConvertError::InvalidAmount`], если результат не является неотрицательным
    ///   десятичным числом.
    pub fn from_buxfer(raw: &str) -> Result<Self, ConvertError> {
        let Some((offset, _)) = raw.char_indices().nth(CURRENCY_PREFIX_LEN) else {
            return Err(ConvertError::AmountTooShort {
                amount: raw.to_string(),
            });
        };

        let normalized = raw[offset..].replace('.', "").replace(',', ".");
        let digits_only = normalized.chars().all(|c| c.is_ascii_digit() || c == '.');
        if !digits_only || Decimal::from_str(&normalized).is_err() {
            return Err(ConvertError::InvalidAmount {
                amount: raw.to_string(),
            });
        }
        Ok(Amount(normalized))
    }

    /// Та же величина со знаком минус.
    pub fn negated(&self) -> Amount {
        Amount(format!("-{}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Строка импорта ClearCheckbook.
///
/// Порядок объявления полей совпадает с порядком колонок в файле:
/// DATE, AMOUNT, DESCRIPTION, MEMO, PAYEE, CHECK_NUMBER, CATEGORY, ACCOUNT.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct DestinationRecord {
    pub date: String,
    pub amount: Amount,
    pub description: String,
    pub memo: String,
    pub payee: String,
    pub check_number: String,
    pub category: String,
    pub account: String,
}

impl DestinationRecord {
    /// Создаёт запись с пустыми MEMO, PAYEE и CHECK_NUMBER.
    pub fn new(
        date: &str,
        amount: Amount,
        description: &str,
        category: &str,
        account: &str,
    ) -> Self {
        DestinationRecord {
            date: date.to_string(),
            amount,
            description: description.to_string(),
            memo: String::new(),
            payee: String::new(),
            check_number: String::new(),
            category: category.to_string(),
            account: account.to_string(),
        }
    }
}
