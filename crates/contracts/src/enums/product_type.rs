use serde::{Deserialize, Serialize};

/// Верхнеуровневый тип товара в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Car,
    Part,
    Tool,
    Custom,
}

impl ProductType {
    /// Префиксы slug в порядке приоритета проверки
    const SLUG_RULES: [(&'static str, ProductType); 4] = [
        ("cars", ProductType::Car),
        ("parts", ProductType::Part),
        ("tools", ProductType::Tool),
        ("custom", ProductType::Custom),
    ];

    /// Получить код типа (значение в API и query string)
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Car => "car",
            ProductType::Part => "part",
            ProductType::Tool => "tool",
            ProductType::Custom => "custom",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Car => "Cars",
            ProductType::Part => "Parts",
            ProductType::Tool => "Tools",
            ProductType::Custom => "Custom builds",
        }
    }

    /// Получить все типы
    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Car,
            ProductType::Part,
            ProductType::Tool,
            ProductType::Custom,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "car" => Some(ProductType::Car),
            "part" => Some(ProductType::Part),
            "tool" => Some(ProductType::Tool),
            "custom" => Some(ProductType::Custom),
            _ => None,
        }
    }

    /// Определить тип по slug категории.
    ///
    /// Slug совпадает с префиксом целиком либо начинается с `"<префикс>-"`.
    /// Первое совпавшее правило выигрывает.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::SLUG_RULES
            .iter()
            .find(|(prefix, _)| {
                slug == *prefix
                    || slug
                        .strip_prefix(prefix)
                        .map_or(false, |rest| rest.starts_with('-'))
            })
            .map(|(_, product_type)| *product_type)
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slug_exact_and_prefixed() {
        assert_eq!(ProductType::from_slug("cars"), Some(ProductType::Car));
        assert_eq!(ProductType::from_slug("parts-engine"), Some(ProductType::Part));
        assert_eq!(ProductType::from_slug("tools-hand"), Some(ProductType::Tool));
        assert_eq!(ProductType::from_slug("custom-build"), Some(ProductType::Custom));
    }

    #[test]
    fn test_from_slug_requires_dash_boundary() {
        assert_eq!(ProductType::from_slug("partsbin"), None);
        assert_eq!(ProductType::from_slug("customer"), None);
        assert_eq!(ProductType::from_slug("root"), None);
        assert_eq!(ProductType::from_slug(""), None);
    }

    #[test]
    fn test_code_round_trip() {
        for pt in ProductType::all() {
            assert_eq!(ProductType::from_code(pt.code()), Some(pt));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ProductType::Custom).unwrap();
        assert_eq!(json, "\"custom\"");
    }
}
