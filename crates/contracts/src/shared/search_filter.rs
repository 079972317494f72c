//! Фильтр поиска по каталогу: выбранные значения осей и их сериализация
//! в параметры запроса к поисковому endpoint бэкенда.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::a001_category::CategoryId;
use crate::enums::{AttributeAxis, BranchKey, ProductType};
use crate::shared::csv_codec;
use crate::shared::taxonomy::resolve_branch;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(rename = "productType")]
    pub product_type: Option<ProductType>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,

    pub main: Option<String>,

    pub sub: Option<String>,

    /// Выбранные значения по осям (многозначные)
    #[serde(default)]
    pub attributes: BTreeMap<AttributeAxis, Vec<String>>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить значения оси; повторы не добавляются
    pub fn select<S: AsRef<str>>(&mut self, axis: AttributeAxis, values: &[S]) {
        let entry = self.attributes.entry(axis).or_default();
        for value in values {
            let value = value.as_ref().trim();
            if !value.is_empty() && !entry.iter().any(|v| v == value) {
                entry.push(value.to_string());
            }
        }
    }

    pub fn selected(&self, axis: AttributeAxis) -> &[String] {
        self.attributes
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn branch(&self) -> BranchKey {
        resolve_branch(self.main.as_deref(), self.sub.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Пары параметров запроса в стабильном порядке: тип, категория,
    /// main, sub, затем оси в порядке [`AttributeAxis::all`].
    /// Пустые значения не выводятся.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(product_type) = self.product_type {
            pairs.push(("product_type".to_string(), product_type.code().to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_id".to_string(), category_id.value().to_string()));
        }
        for (key, value) in [("main", &self.main), ("sub", &self.sub)] {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key.to_string(), value.to_string()));
            }
        }

        for axis in AttributeAxis::all() {
            // product_type уже выведен отдельным полем
            if axis == AttributeAxis::ProductType && self.product_type.is_some() {
                continue;
            }
            if let Some(encoded) = csv_codec::encode(Some(self.selected(axis))) {
                pairs.push((axis.code().to_string(), encoded));
            }
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_order_and_encoding() {
        let mut filter = SearchFilter::new();
        filter.product_type = Some(ProductType::Part);
        filter.main = Some("engine-drivetrain".into());
        filter.sub = Some("turbochargers".into());
        filter.select(AttributeAxis::DriveType, &["awd", "fwd"]);
        filter.select(AttributeAxis::FuelType, &["diesel", " ", "diesel"]);

        assert_eq!(
            filter.to_query_pairs(),
            vec![
                ("product_type".to_string(), "part".to_string()),
                ("main".to_string(), "engine-drivetrain".to_string()),
                ("sub".to_string(), "turbochargers".to_string()),
                ("fuel_type".to_string(), "diesel".to_string()),
                ("drive_type".to_string(), "awd,fwd".to_string()),
            ]
        );
        assert_eq!(filter.branch(), BranchKey::Turbochargers);
    }

    #[test]
    fn test_product_type_axis_emitted_without_single_type() {
        let mut filter = SearchFilter::new();
        filter.select(AttributeAxis::ProductType, &["car", "tool"]);
        assert_eq!(
            filter.to_query_pairs(),
            vec![("product_type".to_string(), "car,tool".to_string())]
        );

        filter.product_type = Some(ProductType::Part);
        assert_eq!(
            filter.to_query_pairs(),
            vec![("product_type".to_string(), "part".to_string())]
        );
    }

    #[test]
    fn test_empty_filter() {
        let mut filter = SearchFilter::new();
        filter.select::<&str>(AttributeAxis::BodyType, &[]);
        filter.main = Some("   ".into());
        assert!(filter.is_empty());
        assert_eq!(filter.branch(), BranchKey::Global);
    }
}
