use std::collections::BTreeMap;

use contracts::domain::a001_category::{Category, CategoryClassification, CategoryIndex};
use contracts::enums::ProductType;

/// Итоги классификации снимка
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub total: usize,
    pub by_type: BTreeMap<&'static str, usize>,
    pub unresolved: usize,
    pub cyclic: usize,
}

/// Классифицировать все категории снимка и залогировать проблемные
pub fn classify(categories: &[Category]) -> Vec<CategoryClassification> {
    let index = CategoryIndex::new(categories);
    let result = index.classify_all();

    for item in &result {
        if item.cyclic {
            tracing::warn!(
                "Category {} ({}) has a cyclic parent chain: {:?}",
                item.id,
                item.slug,
                index.ancestors(item.id).iter().map(|c| c.id.value()).collect::<Vec<_>>()
            );
        } else if item.product_type.is_none() {
            tracing::debug!("Category {} ({}) has no inferable product type", item.id, item.slug);
        }
    }

    result
}

pub fn summarize(classifications: &[CategoryClassification]) -> ClassificationSummary {
    let mut summary = ClassificationSummary {
        total: classifications.len(),
        ..Default::default()
    };

    for pt in ProductType::all() {
        summary.by_type.insert(pt.code(), 0);
    }

    for item in classifications {
        match item.product_type {
            Some(pt) => *summary.by_type.entry(pt.code()).or_insert(0) += 1,
            None if item.cyclic => summary.cyclic += 1,
            None => summary.unresolved += 1,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_counts() {
        let categories = vec![
            Category::new(1, "cars", None),
            Category::new(2, "cars-suv", Some(1)),
            Category::new(3, "parts", None),
            Category::new(4, "misc", None),
            Category::new(5, "loop-a", Some(6)),
            Category::new(6, "loop-b", Some(5)),
        ];
        let summary = summarize(&classify(&categories));

        assert_eq!(summary.total, 6);
        assert_eq!(summary.by_type.get("car"), Some(&2));
        assert_eq!(summary.by_type.get("part"), Some(&1));
        assert_eq!(summary.by_type.get("tool"), Some(&0));
        assert_eq!(summary.unresolved, 1);
        assert_eq!(summary.cyclic, 2);
    }
}
