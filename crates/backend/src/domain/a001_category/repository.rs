//! Загрузка снимка категорий, выгруженного из API витрины.

use std::path::Path;

use contracts::domain::a001_category::{Category, RawCategory};
use serde_json::Value;
use thiserror::Error;

/// Ошибки загрузки снимка
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected snapshot shape: {0}")]
    UnexpectedShape(String),
}

/// Достать массив записей: голый массив или обертка `data` / `categories`
fn extract_records(document: Value) -> Result<Vec<Value>, SnapshotError> {
    match document {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => ["data", "categories"]
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            })
            .ok_or_else(|| {
                SnapshotError::UnexpectedShape("object without data/categories array".to_string())
            }),
        other => Err(SnapshotError::UnexpectedShape(format!(
            "expected array or object, got {}",
            other
        ))),
    }
}

/// Разобрать JSON снимка и привести записи к каноническому виду.
///
/// Битая запись (не объект, непригодный id) пропускается с предупреждением
/// и не ломает загрузку остальных.
pub fn parse_snapshot(json: &str) -> Result<Vec<Category>, SnapshotError> {
    let document: Value = serde_json::from_str(json)?;
    let records = extract_records(document)?;
    let total = records.len();

    let categories: Vec<Category> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let raw = match serde_json::from_value::<RawCategory>(record) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Skipping category record #{}: {}", position, e);
                    return None;
                }
            };
            let normalized = raw.normalize();
            if normalized.is_none() {
                tracing::warn!(
                    "Skipping category without usable id: #{} slug={:?}",
                    position,
                    raw.slug_str().unwrap_or("")
                );
            }
            normalized
        })
        .collect();

    tracing::debug!("Parsed {} of {} category records", categories.len(), total);
    Ok(categories)
}

pub fn load_snapshot(path: &Path) -> Result<Vec<Category>, SnapshotError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_snapshot(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::CategoryId;

    #[test]
    fn test_parse_bare_list_with_mixed_parent_fields() {
        let json = r#"[
            {"id": 1, "slug": "parts"},
            {"id": 2, "slug": "parts-engine", "parent_id": 1},
            {"id": "3", "slug": "parts-engine-turbo", "parent": {"id": 2}},
            {"slug": "broken"}
        ]"#;
        let categories = parse_snapshot(json).unwrap();
        assert_eq!(categories.len(), 3);
        assert_eq!(categories[1].parent_id, Some(CategoryId(1)));
        assert_eq!(categories[2].id, CategoryId(3));
        assert_eq!(categories[2].parent_id, Some(CategoryId(2)));
    }

    #[test]
    fn test_parse_envelopes() {
        let data = r#"{"data": [{"id": 1, "slug": "cars"}]}"#;
        assert_eq!(parse_snapshot(data).unwrap().len(), 1);

        let categories = r#"{"categories": [{"id": 1, "slug": "tools"}, {"id": 2, "slug": "x", "parentId": 1}]}"#;
        assert_eq!(parse_snapshot(categories).unwrap().len(), 2);
    }

    #[test]
    fn test_bad_record_does_not_fail_snapshot() {
        let json = r#"[
            {"id": 1, "slug": "parts"},
            {"id": true, "slug": "bad"},
            {"id": 2, "slug": 5},
            {"id": 3, "slug": "parts-brakes", "parentId": {}, "parent_id": 1},
            "not a record",
            42
        ]"#;
        let categories = parse_snapshot(json).unwrap();
        let ids: Vec<i64> = categories.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(categories[1].slug, "");
        assert_eq!(categories[2].parent_id, Some(CategoryId(1)));
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(matches!(
            parse_snapshot(r#"{"items": []}"#),
            Err(SnapshotError::UnexpectedShape(_))
        ));
        assert!(matches!(parse_snapshot("5"), Err(SnapshotError::UnexpectedShape(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_snapshot("{not json"), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/categories.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
