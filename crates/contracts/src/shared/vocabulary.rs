//! Проверка значений по фиксированным словарям осей.
//!
//! Сравнение точное после [`normalize_token`]: без нечеткого поиска,
//! синонимов и правил между осями.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::enums::AttributeAxis;
use crate::shared::csv_codec::normalize_token;

static INDEX: Lazy<HashMap<AttributeAxis, HashSet<&'static str>>> = Lazy::new(|| {
    AttributeAxis::all()
        .into_iter()
        .map(|axis| (axis, axis.values().iter().copied().collect()))
        .collect()
});

/// Написание значения из словаря оси, если `token` в нем есть
pub fn canonical(axis: AttributeAxis, token: &str) -> Option<&'static str> {
    let normalized = normalize_token(token);
    INDEX
        .get(&axis)
        .and_then(|values| values.get(normalized.as_str()))
        .copied()
}

pub fn is_valid(axis: AttributeAxis, token: &str) -> bool {
    canonical(axis, token).is_some()
}

/// Разделить токены на принятые (в написании словаря) и отклоненные.
/// Порядок в обеих частях совпадает с входом.
pub fn partition<S: AsRef<str>>(
    axis: AttributeAxis,
    tokens: &[S],
) -> (Vec<&'static str>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for token in tokens {
        match canonical(axis, token.as_ref()) {
            Some(value) => accepted.push(value),
            None => rejected.push(token.as_ref().to_string()),
        }
    }
    (accepted, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_case_insensitive() {
        assert!(is_valid(AttributeAxis::DriveType, "AWD"));
        assert!(is_valid(AttributeAxis::DriveType, " 4wd "));
        assert!(!is_valid(AttributeAxis::DriveType, "all-wheel"));
    }

    #[test]
    fn test_axes_are_independent() {
        assert!(is_valid(AttributeAxis::FuelType, "electric"));
        assert!(is_valid(AttributeAxis::Transmission, "manual"));
        assert!(!is_valid(AttributeAxis::FuelType, "manual"));
    }

    #[test]
    fn test_canonical_spelling() {
        assert_eq!(canonical(AttributeAxis::Condition, "Used"), Some("used"));
        assert_eq!(canonical(AttributeAxis::Condition, "mint"), None);
    }

    #[test]
    fn test_partition() {
        let (accepted, rejected) =
            partition(AttributeAxis::FuelType, &["Diesel", "steam", "lpg"]);
        assert_eq!(accepted, vec!["diesel", "lpg"]);
        assert_eq!(rejected, vec!["steam".to_string()]);
    }
}
