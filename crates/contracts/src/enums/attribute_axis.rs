use serde::{Deserialize, Serialize};

/// Ось классификации товара (независимое измерение фильтра)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeAxis {
    ProductType,
    Condition,
    OemAftermarket,
    CompatibilityMode,
    FuelType,
    Transmission,
    BodyType,
    DriveType,
    PartPosition,
    PowerSource,
    DriveSize,
    StyleTag,
    FinishType,
    InstallationDifficulty,
}

const PRODUCT_TYPES: &[&str] = &["car", "part", "tool", "custom"];
const CONDITIONS: &[&str] = &["new", "used", "refurbished", "remanufactured"];
const OEM_AFTERMARKET: &[&str] = &["oem", "aftermarket"];
const COMPATIBILITY_MODES: &[&str] = &["universal", "vehicle-specific"];
const FUEL_TYPES: &[&str] = &["petrol", "diesel", "hybrid", "electric", "lpg", "other"];
const TRANSMISSIONS: &[&str] = &["manual", "automatic", "semi-automatic", "cvt", "dct", "other"];
const BODY_TYPES: &[&str] = &[
    "sedan",
    "hatchback",
    "wagon",
    "coupe",
    "convertible",
    "suv",
    "pickup",
    "van",
    "other",
];
const DRIVE_TYPES: &[&str] = &["fwd", "rwd", "awd", "4wd", "other"];
const PART_POSITIONS: &[&str] = &[
    "front",
    "rear",
    "left",
    "right",
    "front-left",
    "front-right",
    "rear-left",
    "rear-right",
    "upper",
    "lower",
];
const POWER_SOURCES: &[&str] = &["manual", "corded", "cordless", "pneumatic", "hydraulic"];
const DRIVE_SIZES: &[&str] = &["1/4", "3/8", "1/2", "3/4", "1"];
const STYLE_TAGS: &[&str] = &["oem-look", "sport", "off-road", "luxury", "classic", "stance"];
const FINISH_TYPES: &[&str] = &[
    "chrome",
    "gloss-black",
    "matte-black",
    "silver",
    "gunmetal",
    "polished",
    "painted",
    "raw",
];
const INSTALLATION_DIFFICULTIES: &[&str] = &["easy", "moderate", "advanced", "professional"];

impl AttributeAxis {
    /// Имя параметра в query string
    pub fn code(&self) -> &'static str {
        match self {
            AttributeAxis::ProductType => "product_type",
            AttributeAxis::Condition => "condition",
            AttributeAxis::OemAftermarket => "oem_aftermarket",
            AttributeAxis::CompatibilityMode => "compatibility_mode",
            AttributeAxis::FuelType => "fuel_type",
            AttributeAxis::Transmission => "transmission",
            AttributeAxis::BodyType => "body_type",
            AttributeAxis::DriveType => "drive_type",
            AttributeAxis::PartPosition => "part_position",
            AttributeAxis::PowerSource => "power_source",
            AttributeAxis::DriveSize => "drive_size",
            AttributeAxis::StyleTag => "style_tag",
            AttributeAxis::FinishType => "finish_type",
            AttributeAxis::InstallationDifficulty => "installation_difficulty",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AttributeAxis::ProductType => "Product type",
            AttributeAxis::Condition => "Condition",
            AttributeAxis::OemAftermarket => "OEM / Aftermarket",
            AttributeAxis::CompatibilityMode => "Compatibility",
            AttributeAxis::FuelType => "Fuel type",
            AttributeAxis::Transmission => "Transmission",
            AttributeAxis::BodyType => "Body type",
            AttributeAxis::DriveType => "Drive type",
            AttributeAxis::PartPosition => "Position",
            AttributeAxis::PowerSource => "Power source",
            AttributeAxis::DriveSize => "Drive size",
            AttributeAxis::StyleTag => "Style",
            AttributeAxis::FinishType => "Finish",
            AttributeAxis::InstallationDifficulty => "Installation",
        }
    }

    /// Допустимые значения оси в порядке отображения
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            AttributeAxis::ProductType => PRODUCT_TYPES,
            AttributeAxis::Condition => CONDITIONS,
            AttributeAxis::OemAftermarket => OEM_AFTERMARKET,
            AttributeAxis::CompatibilityMode => COMPATIBILITY_MODES,
            AttributeAxis::FuelType => FUEL_TYPES,
            AttributeAxis::Transmission => TRANSMISSIONS,
            AttributeAxis::BodyType => BODY_TYPES,
            AttributeAxis::DriveType => DRIVE_TYPES,
            AttributeAxis::PartPosition => PART_POSITIONS,
            AttributeAxis::PowerSource => POWER_SOURCES,
            AttributeAxis::DriveSize => DRIVE_SIZES,
            AttributeAxis::StyleTag => STYLE_TAGS,
            AttributeAxis::FinishType => FINISH_TYPES,
            AttributeAxis::InstallationDifficulty => INSTALLATION_DIFFICULTIES,
        }
    }

    /// Все оси в порядке отображения
    pub fn all() -> Vec<AttributeAxis> {
        vec![
            AttributeAxis::ProductType,
            AttributeAxis::Condition,
            AttributeAxis::OemAftermarket,
            AttributeAxis::CompatibilityMode,
            AttributeAxis::FuelType,
            AttributeAxis::Transmission,
            AttributeAxis::BodyType,
            AttributeAxis::DriveType,
            AttributeAxis::PartPosition,
            AttributeAxis::PowerSource,
            AttributeAxis::DriveSize,
            AttributeAxis::StyleTag,
            AttributeAxis::FinishType,
            AttributeAxis::InstallationDifficulty,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|axis| axis.code() == code)
    }
}

impl std::fmt::Display for AttributeAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
