//! Разбор и сборка query string поискового запроса по каталогу.
//!
//! Входящие параметры фильтра проверяются по словарям осей до того,
//! как запрос уйдет в поисковый endpoint бэкенда.

use contracts::domain::a001_category::{parse_category_id, CategoryIndex};
use contracts::enums::{AttributeAxis, MainCategory, ProductType};
use contracts::shared::csv_codec;
use contracts::shared::search_filter::SearchFilter;
use contracts::shared::taxonomy::get_subcategories;
use contracts::shared::vocabulary;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Malformed query string: {0}")]
    Malformed(String),

    #[error("Unknown {axis} value(s): {}", .tokens.join(", "))]
    UnknownTokens {
        axis: AttributeAxis,
        tokens: Vec<String>,
    },

    #[error("Invalid category id: {0}")]
    InvalidCategoryId(String),

    #[error("Unknown main category: {0}")]
    UnknownMainCategory(String),

    #[error("Unknown subcategory {sub} for {main}")]
    UnknownSubcategory { main: String, sub: String },
}

fn decode_component(raw: &str) -> Result<String, FilterError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|e| FilterError::Malformed(format!("{}: {}", raw, e)))
}

/// В строгом режиме возвращает ошибку, иначе пишет предупреждение
/// и позволяет отбросить значение.
fn reject(strict: bool, error: FilterError) -> Result<(), FilterError> {
    if strict {
        Err(error)
    } else {
        tracing::warn!("Dropping filter value: {}", error);
        Ok(())
    }
}

/// Разобрать query string в фильтр.
///
/// Значения осей декодируются из CSV и приводятся к написанию словаря.
/// Неизвестные параметры (пагинация, сортировка) игнорируются.
pub fn parse_query(query: &str, strict: bool) -> Result<SearchFilter, FilterError> {
    let mut filter = SearchFilter::new();
    let query = query.trim_start_matches('?');

    for part in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = part.split_once('=').unwrap_or((part, ""));
        let key = decode_component(raw_key)?;
        let value = decode_component(raw_value)?;

        match key.as_str() {
            "category_id" => match parse_category_id(Some(value.as_str())) {
                Some(id) => filter.category_id = Some(id),
                None => reject(strict, FilterError::InvalidCategoryId(value))?,
            },
            "main" => {
                let slug = csv_codec::normalize_token(&value);
                if slug.is_empty() {
                    continue;
                }
                match MainCategory::from_slug(&slug) {
                    Some(main) => filter.main = Some(main.as_str().to_string()),
                    None => reject(strict, FilterError::UnknownMainCategory(value))?,
                }
            }
            "sub" => {
                let slug = csv_codec::normalize_token(&value);
                if !slug.is_empty() {
                    filter.sub = Some(slug);
                }
            }
            other => match AttributeAxis::from_code(other) {
                Some(axis) => {
                    let tokens = csv_codec::decode_normalized(Some(value.as_str()));
                    let (accepted, rejected) = vocabulary::partition(axis, &tokens);
                    if !rejected.is_empty() {
                        reject(
                            strict,
                            FilterError::UnknownTokens {
                                axis,
                                tokens: rejected,
                            },
                        )?;
                    }
                    filter.select(axis, &accepted);
                }
                None => tracing::debug!("Ignoring query parameter {}", other),
            },
        }
    }

    validate_sub(&mut filter, strict)?;
    promote_product_type(&mut filter);

    Ok(filter)
}

/// Подкатегория должна принадлежать выбранной главной категории
fn validate_sub(filter: &mut SearchFilter, strict: bool) -> Result<(), FilterError> {
    let (Some(main), Some(sub)) = (filter.main.as_deref(), filter.sub.as_deref()) else {
        return Ok(());
    };

    if get_subcategories(Some(main)).iter().any(|s| *s == sub) {
        return Ok(());
    }

    let error = FilterError::UnknownSubcategory {
        main: main.to_string(),
        sub: sub.to_string(),
    };
    reject(strict, error)?;
    filter.sub = None;
    Ok(())
}

/// Единственное значение оси product_type переносится в отдельное поле
fn promote_product_type(filter: &mut SearchFilter) {
    let selected = filter.selected(AttributeAxis::ProductType);
    if selected.len() != 1 {
        return;
    }
    if let Some(product_type) = ProductType::from_code(&selected[0]) {
        filter.product_type = Some(product_type);
        filter.attributes.remove(&AttributeAxis::ProductType);
    }
}

/// Заполнить тип товара по категории, если он не задан явно
/// (ни одним значением, ни множественным выбором по оси product_type).
/// Возвращает `true`, если тип был выведен.
pub fn infer_product_type(filter: &mut SearchFilter, index: &CategoryIndex<'_>) -> bool {
    if filter.product_type.is_some() || !filter.selected(AttributeAxis::ProductType).is_empty() {
        return false;
    }
    let Some(category_id) = filter.category_id else {
        return false;
    };

    match index.try_resolve_product_type(category_id) {
        Ok(Some(product_type)) => {
            filter.product_type = Some(product_type);
            true
        }
        Ok(None) => {
            tracing::info!("No product type inferable for category {}", category_id);
            false
        }
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}

/// Собрать query string для поискового endpoint бэкенда
pub fn build_query(filter: &SearchFilter) -> String {
    filter
        .to_query_pairs()
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::{Category, CategoryId};
    use contracts::enums::BranchKey;

    #[test]
    fn test_parse_normalizes_tokens() {
        let filter = parse_query(
            "?fuel_type=Diesel,%20petrol,,diesel&drive_type=AWD&main=engine-drivetrain&sub=engines",
            true,
        )
        .unwrap();

        assert_eq!(filter.selected(AttributeAxis::FuelType), &["diesel", "petrol"]);
        assert_eq!(filter.selected(AttributeAxis::DriveType), &["awd"]);
        assert_eq!(filter.branch(), BranchKey::Engines);
    }

    #[test]
    fn test_strict_rejects_unknown_tokens() {
        let err = parse_query("drive_type=awd,hover", true).unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownTokens {
                axis: AttributeAxis::DriveType,
                tokens: vec!["hover".to_string()],
            }
        );
    }

    #[test]
    fn test_lenient_drops_unknown_tokens() {
        let filter = parse_query("drive_type=awd,hover&main=boats&category_id=abc", false).unwrap();
        assert_eq!(filter.selected(AttributeAxis::DriveType), &["awd"]);
        assert_eq!(filter.main, None);
        assert_eq!(filter.category_id, None);
    }

    #[test]
    fn test_sub_must_belong_to_main() {
        let err = parse_query("main=wheels&sub=engines", true).unwrap_err();
        assert!(matches!(err, FilterError::UnknownSubcategory { .. }));

        let filter = parse_query("main=wheels&sub=engines", false).unwrap();
        assert_eq!(filter.sub, None);
        assert_eq!(filter.branch(), BranchKey::Wheels);
    }

    #[test]
    fn test_single_product_type_is_promoted() {
        let filter = parse_query("product_type=Part", true).unwrap();
        assert_eq!(filter.product_type, Some(ProductType::Part));
        assert!(filter.selected(AttributeAxis::ProductType).is_empty());

        let filter = parse_query("product_type=part,tool", true).unwrap();
        assert_eq!(filter.product_type, None);
        assert_eq!(filter.selected(AttributeAxis::ProductType), &["part", "tool"]);
    }

    #[test]
    fn test_malformed_percent_encoding() {
        assert!(matches!(
            parse_query("fuel_type=%FF", false),
            Err(FilterError::Malformed(_))
        ));
    }

    #[test]
    fn test_infer_product_type_from_category() {
        let categories = vec![
            Category::new(1, "parts", None),
            Category::new(2, "parts-engine", Some(1)),
        ];
        let index = CategoryIndex::new(&categories);

        let mut filter = parse_query("category_id=2", true).unwrap();
        assert!(infer_product_type(&mut filter, &index));
        assert_eq!(filter.product_type, Some(ProductType::Part));

        let mut explicit = parse_query("category_id=2&product_type=tool", true).unwrap();
        assert!(!infer_product_type(&mut explicit, &index));
        assert_eq!(explicit.product_type, Some(ProductType::Tool));
        assert_eq!(explicit.category_id, Some(CategoryId(2)));
    }

    #[test]
    fn test_multi_valued_product_type_is_not_overridden() {
        let categories = vec![
            Category::new(1, "parts", None),
            Category::new(2, "parts-engine", Some(1)),
        ];
        let index = CategoryIndex::new(&categories);

        let mut filter = parse_query("category_id=2&product_type=car,tool", true).unwrap();
        assert!(!infer_product_type(&mut filter, &index));
        assert_eq!(filter.product_type, None);
        assert_eq!(
            build_query(&filter),
            "category_id=2&product_type=car%2Ctool"
        );
    }

    #[test]
    fn test_query_round_trip_with_escaped_values() {
        let filter = parse_query("drive_size=1%2F2,+3/8+&fuel_type=+LPG&sub=engines", true).unwrap();
        assert_eq!(filter.selected(AttributeAxis::DriveSize), &["1/2", "3/8"]);
        assert_eq!(filter.selected(AttributeAxis::FuelType), &["lpg"]);

        let query = build_query(&filter);
        assert_eq!(query, "sub=engines&fuel_type=lpg&drive_size=1%2F2%2C3%2F8");
        assert_eq!(parse_query(&query, true).unwrap(), filter);
    }

    #[test]
    fn test_build_query() {
        let filter = parse_query("drive_type=fwd,awd&category_id=7&page=2", true).unwrap();
        assert_eq!(build_query(&filter), "category_id=7&drive_type=fwd%2Cawd");
    }
}
