//! Записи категорий в том виде, в котором их отдает API витрины.
//!
//! Разные endpoint'ы называют ссылку на родителя по-разному (`parentId`,
//! `parent_id` или вложенный `parent: { id }`), часть отдает id строкой.
//! [`RawCategory::normalize`] сводит все варианты к [`Category`].
//! Поля неожиданного типа не ломают разбор записи, а считаются отсутствующими.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregate::{Category, CategoryId};
use crate::domain::common::AggregateId;

/// Id в формате API: число или числовая строка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
    /// bool, объект, массив: id не определен
    Other(Value),
}

impl RawId {
    pub fn resolve(&self) -> Option<CategoryId> {
        match self {
            RawId::Int(v) => Some(CategoryId(*v)),
            RawId::Float(v) => float_to_id(*v),
            RawId::Text(s) => CategoryId::from_string(s).ok(),
            RawId::Other(_) => None,
        }
    }
}

/// Целое значение f64 в пределах i64; иначе `None`
fn float_to_id(v: f64) -> Option<CategoryId> {
    let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
    if v.is_finite() && v.fract() == 0.0 && in_range {
        Some(CategoryId(v as i64))
    } else {
        None
    }
}

/// Строковое поле; значение другого типа считается отсутствующим
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Other(Value),
}

impl RawText {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawText::Text(s) => Some(s.as_str()),
            RawText::Other(_) => None,
        }
    }
}

/// Денормализованный фрагмент родителя, может содержать только id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParentRef {
    #[serde(default)]
    pub id: Option<RawId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawParent {
    Ref(RawParentRef),
    Other(Value),
}

impl RawParent {
    fn id(&self) -> Option<&RawId> {
        match self {
            RawParent::Ref(parent) => parent.id.as_ref(),
            RawParent::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<RawId>,

    #[serde(default)]
    pub slug: Option<RawText>,

    #[serde(default)]
    pub name: Option<RawText>,

    #[serde(rename = "parentId", default)]
    pub parent_id_camel: Option<RawId>,

    #[serde(rename = "parent_id", default)]
    pub parent_id_snake: Option<RawId>,

    #[serde(default)]
    pub parent: Option<RawParent>,
}

impl RawCategory {
    /// Slug записи, если он строкой
    pub fn slug_str(&self) -> Option<&str> {
        self.slug.as_ref().and_then(RawText::as_str)
    }

    /// Id родителя с приоритетом `parentId`, затем `parent_id`, затем `parent.id`.
    /// Выигрывает первое поле с пригодным id.
    pub fn resolve_parent_id(&self) -> Option<CategoryId> {
        self.parent_id_camel
            .as_ref()
            .and_then(RawId::resolve)
            .or_else(|| self.parent_id_snake.as_ref().and_then(RawId::resolve))
            .or_else(|| {
                self.parent
                    .as_ref()
                    .and_then(RawParent::id)
                    .and_then(RawId::resolve)
            })
    }

    /// Каноническая запись или `None`, если собственный id записи непригоден
    pub fn normalize(&self) -> Option<Category> {
        let id = self.id.as_ref().and_then(RawId::resolve)?;

        Some(Category {
            id,
            slug: self.slug_str().unwrap_or_default().trim().to_string(),
            parent_id: self.resolve_parent_id(),
            name: self
                .name
                .as_ref()
                .and_then(RawText::as_str)
                .map(str::to_string),
        })
    }
}
