//! Обход графа категорий вверх по родителям для определения типа товара.
//!
//! Снимок категорий неизменяем на время вызова. Индекс id -> категория
//! строится один раз в [`CategoryIndex::new`]; вызывающий код на горячих путях
//! держит индекс у себя.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::aggregate::{Category, CategoryId};
use crate::enums::ProductType;

/// Ошибки обхода графа категорий
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryGraphError {
    /// Родительские ссылки образуют цикл
    Cycle {
        start: CategoryId,
        repeated: CategoryId,
    },
}

impl std::fmt::Display for CategoryGraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryGraphError::Cycle { start, repeated } => write!(
                f,
                "inference aborted: cyclic category graph (start {}, revisited {})",
                start, repeated
            ),
        }
    }
}

impl std::error::Error for CategoryGraphError {}

/// Результат классификации одной категории снимка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryClassification {
    pub id: CategoryId,
    pub slug: String,
    #[serde(rename = "productType")]
    pub product_type: Option<ProductType>,
    pub cyclic: bool,
}

/// Индекс id -> категория над снимком
#[derive(Debug, Clone)]
pub struct CategoryIndex<'a> {
    ordered: Vec<&'a Category>,
    by_id: HashMap<CategoryId, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    /// При повторяющихся id побеждает последняя запись
    pub fn new(categories: &'a [Category]) -> Self {
        let by_id = categories.iter().map(|c| (c.id, c)).collect();
        Self {
            ordered: categories.iter().collect(),
            by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn get(&self, id: CategoryId) -> Option<&'a Category> {
        self.by_id.get(&id).copied()
    }

    /// Родитель, если он есть в снимке. Ссылка за пределы снимка
    /// считается границей корня.
    pub fn parent_of(&self, category: &Category) -> Option<&'a Category> {
        category.parent_id.and_then(|pid| self.get(pid))
    }

    /// Цепочка от категории к корню (сама категория первая).
    /// При цикле цепочка обрывается перед повтором.
    pub fn ancestors(&self, id: CategoryId) -> Vec<&'a Category> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.get(id);

        while let Some(category) = current {
            if !visited.insert(category.id) {
                break;
            }
            chain.push(category);
            current = self.parent_of(category);
        }

        chain
    }

    /// Slug'и от корня к категории, для хлебных крошек
    pub fn path_slugs(&self, id: CategoryId) -> Vec<&'a str> {
        self.ancestors(id)
            .into_iter()
            .rev()
            .map(|c| c.slug.as_str())
            .collect()
    }

    /// Тип товара с явной ошибкой при цикле в родительских ссылках.
    ///
    /// `Ok(None)` означает, что тип вывести не удалось: неизвестный id,
    /// ни один предок не подходит под правила slug, или цепочка ушла
    /// за пределы снимка.
    pub fn try_resolve_product_type(
        &self,
        id: CategoryId,
    ) -> Result<Option<ProductType>, CategoryGraphError> {
        match self.get(id) {
            Some(category) => self.try_resolve_from(category),
            None => Ok(None),
        }
    }

    /// Обход, начиная с самой записи, а не с записи-победителя индекса
    /// по ее id: при повторяющихся id каждая запись оценивается по своему slug.
    pub fn try_resolve_from(
        &self,
        start: &Category,
    ) -> Result<Option<ProductType>, CategoryGraphError> {
        let mut visited = HashSet::new();
        let mut current = Some(start);

        while let Some(category) = current {
            if !visited.insert(category.id) {
                return Err(CategoryGraphError::Cycle {
                    start: start.id,
                    repeated: category.id,
                });
            }
            if let Some(product_type) = ProductType::from_slug(&category.slug) {
                return Ok(Some(product_type));
            }
            current = self.parent_of(category);
        }

        Ok(None)
    }

    /// Тип товара; цикл деградирует в `None`
    pub fn resolve_product_type(&self, id: CategoryId) -> Option<ProductType> {
        self.try_resolve_product_type(id).ok().flatten()
    }

    /// Классификация всех категорий снимка в исходном порядке
    pub fn classify_all(&self) -> Vec<CategoryClassification> {
        self.ordered
            .iter()
            .map(|category| {
                let (product_type, cyclic) = match self.try_resolve_from(category) {
                    Ok(product_type) => (product_type, false),
                    Err(CategoryGraphError::Cycle { .. }) => (None, true),
                };
                CategoryClassification {
                    id: category.id,
                    slug: category.slug.clone(),
                    product_type,
                    cyclic,
                }
            })
            .collect()
    }
}

/// Определить тип товара категории по снимку.
///
/// Индекс строится на каждый вызов; для повторных вызовов используйте
/// [`CategoryIndex`] напрямую.
pub fn resolve_product_type(
    category_id: Option<CategoryId>,
    categories: &[Category],
) -> Option<ProductType> {
    let id = category_id?;
    CategoryIndex::new(categories).resolve_product_type(id)
}
