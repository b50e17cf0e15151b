use thiserror::Error;

/// Ошибки чтения исходного файла Buxfer.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("record {record}: {message}")]
    InvalidFormat { record: usize, message: String },
}

/// Тип транзакции, которого нет среди `Income`, `Expense` и `Transfer`.
#[derive(Error, Debug, PartialEq)]
#[error("unrecognized transaction type {0:?}")]
pub struct UnknownTxType(pub String);

/// Ошибки преобразования отдельной строки.
///
/// Строка с неизвестным типом транзакции ошибкой не является и сюда не попадает.
#[derive(Error, Debug, PartialEq)]
pub enum ConvertError {
    #[error("transfer account field {account:?} is not in the form \"FROM -> TO\"")]
    MalformedTransfer { account: String },

    #[error("amount {amount:?} is shorter than the currency prefix")]
    AmountTooShort { amount: String },

    #[error("amount {amount:?} is not a valid decimal number")]
    InvalidAmount { amount: String },
}

/// Ошибки записи файла ClearCheckbook.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Общая ошибка конвейера чтение -> преобразование -> запись.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("record {record}: {source}")]
    Row {
        record: usize,
        #[source]
        source: ConvertError,
    },

    #[error(transparent)]
    Dump(#[from] DumpError),
}
