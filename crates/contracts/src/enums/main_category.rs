use serde::{Deserialize, Serialize};

/// Главные категории дерева классификации запчастей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainCategory {
    EngineDrivetrain,
    Wheels,
    SuspensionBrakes,
    BodyExterior,
    InteriorElectronics,
}

impl MainCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainCategory::EngineDrivetrain => "engine-drivetrain",
            MainCategory::Wheels => "wheels",
            MainCategory::SuspensionBrakes => "suspension-brakes",
            MainCategory::BodyExterior => "body-exterior",
            MainCategory::InteriorElectronics => "interior-electronics",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MainCategory::EngineDrivetrain => "Engine & Drivetrain",
            MainCategory::Wheels => "Wheels & Tires",
            MainCategory::SuspensionBrakes => "Suspension & Brakes",
            MainCategory::BodyExterior => "Body & Exterior",
            MainCategory::InteriorElectronics => "Interior & Electronics",
        }
    }

    pub fn all() -> Vec<MainCategory> {
        vec![
            MainCategory::EngineDrivetrain,
            MainCategory::Wheels,
            MainCategory::SuspensionBrakes,
            MainCategory::BodyExterior,
            MainCategory::InteriorElectronics,
        ]
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|main| main.as_str() == slug)
    }
}
