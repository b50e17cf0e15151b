use crate::types::TRANSFER_DELIMITER;

/// Последний тег из списка через запятую. Без запятой строка возвращается как есть.
pub(crate) fn last_tag(tags: &str) -> &str {
    match tags.rsplit_once(',') {
        Some((_, last)) => last,
        None => tags,
    }
}

/// Поле CSV как строка: UTF-8, если байты корректны, иначе windows-1252.
pub(crate) fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => encoding_rs::WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned(),
    }
}

/// Разбирает `"FROM -> TO"` на пару `(from, to)`.
pub(crate) fn split_accounts(account: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = account.split(TRANSFER_DELIMITER).collect();
    match parts.as_slice() {
        [from, to] if !from.is_empty() && !to.is_empty() => Some((*from, *to)),
        _ => None,
    }
}
