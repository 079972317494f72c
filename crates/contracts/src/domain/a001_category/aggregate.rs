use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CategoryId)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Разбор ID категории из строкового представления (query string, форма).
///
/// Отсутствующее, пустое или нечисловое значение дает `None`.
///
/// # Примеры
/// ```
/// use contracts::domain::a001_category::{parse_category_id, CategoryId};
/// assert_eq!(parse_category_id(Some(" 42 ")), Some(CategoryId(42)));
/// assert_eq!(parse_category_id(Some("NaN")), None);
/// assert_eq!(parse_category_id(None), None);
/// ```
pub fn parse_category_id(raw: Option<&str>) -> Option<CategoryId> {
    CategoryId::from_string(raw?).ok()
}

// ============================================================================
// Canonical record
// ============================================================================

/// Категория каталога в каноническом виде.
///
/// Все варианты ответа API приводятся к этой форме в [`super::RawCategory`],
/// поэтому обход графа видит только одно поле родителя.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub slug: String,

    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,

    #[serde(default)]
    pub name: Option<String>,
}

impl Category {
    pub fn new(id: i64, slug: impl Into<String>, parent_id: Option<i64>) -> Self {
        Self {
            id: CategoryId(id),
            slug: slug.into(),
            parent_id: parent_id.map(CategoryId),
            name: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
