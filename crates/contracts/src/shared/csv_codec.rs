//! Кодек многозначных атрибутов: список токенов <-> строка через запятую.
//!
//! Фильтры вида `fuel_type=petrol,diesel` хранятся и передаются одной строкой.

/// Разбор CSV-строки в список токенов.
///
/// Пустая строка или `None` дают пустой список, токены обрезаются,
/// пустые после обрезки отбрасываются.
///
/// # Примеры
/// ```
/// use contracts::shared::csv_codec::decode;
/// assert_eq!(decode(Some("a, ,b,")), vec!["a", "b"]);
/// assert!(decode(None).is_empty());
/// ```
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Сборка списка значений в CSV-строку.
///
/// Возвращает `None`, если после обрезки не осталось ни одного значения.
/// Порядок входа сохраняется.
pub fn encode<S: AsRef<str>>(values: Option<&[S]>) -> Option<String> {
    let values = values?;

    let tokens: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect();

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(","))
    }
}

/// Нормализация токена для сравнения без учета регистра
pub fn normalize_token(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Разбор с нормализацией каждого токена и удалением повторов
/// (остается первое вхождение).
pub fn decode_normalized(raw: Option<&str>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for token in decode(raw) {
        let token = normalize_token(&token);
        if !result.contains(&token) {
            result.push(token);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_inputs() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("")).is_empty());
        assert!(decode(Some(" , ,")).is_empty());
    }

    #[test]
    fn test_decode_trims_and_drops_empty() {
        assert_eq!(decode(Some("a, ,b,")), vec!["a", "b"]);
        assert_eq!(decode(Some(" a , b ,, c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_encode_empty_inputs() {
        assert_eq!(encode::<&str>(None), None);
        assert_eq!(encode::<&str>(Some(&[][..])), None);
        assert_eq!(encode(Some(&["  ", ""][..])), None);
    }

    #[test]
    fn test_encode_preserves_order() {
        assert_eq!(
            encode(Some(&[" diesel", "petrol ", "", "hybrid"][..])),
            Some("diesel,petrol,hybrid".to_string())
        );
    }

    #[test]
    fn test_round_trip_for_clean_tokens() {
        let samples: Vec<Vec<String>> = vec![
            vec!["petrol".into()],
            vec!["fwd".into(), "awd".into(), "4wd".into()],
            vec!["front left".into(), "rear".into()],
        ];
        for xs in samples {
            let encoded = encode(Some(xs.as_slice()));
            assert_eq!(decode(encoded.as_deref()), xs);
        }
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  AWD "), "awd");
        assert_eq!(normalize_token(""), "");
    }

    #[test]
    fn test_decode_normalized_dedups() {
        assert_eq!(
            decode_normalized(Some("Petrol, DIESEL ,petrol")),
            vec!["petrol", "diesel"]
        );
    }
}
