use serde::{Deserialize, Serialize};

use super::AttributeAxis;

/// Ветка фильтров: определяет, какие дополнительные поля показывать
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchKey {
    #[default]
    Global,
    Wheels,
    Engines,
    Turbochargers,
}

impl BranchKey {
    pub fn code(&self) -> &'static str {
        match self {
            BranchKey::Global => "global",
            BranchKey::Wheels => "wheels",
            BranchKey::Engines => "engines",
            BranchKey::Turbochargers => "turbochargers",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "global" => Some(BranchKey::Global),
            "wheels" => Some(BranchKey::Wheels),
            "engines" => Some(BranchKey::Engines),
            "turbochargers" => Some(BranchKey::Turbochargers),
            _ => None,
        }
    }

    /// Дополнительные оси фильтрации, которые показываются для ветки
    /// сверх общих (состояние, OEM/aftermarket, совместимость).
    pub fn extra_axes(&self) -> &'static [AttributeAxis] {
        match self {
            BranchKey::Global => &[],
            BranchKey::Wheels => &[
                AttributeAxis::FinishType,
                AttributeAxis::StyleTag,
                AttributeAxis::PartPosition,
            ],
            BranchKey::Engines => &[
                AttributeAxis::FuelType,
                AttributeAxis::Transmission,
                AttributeAxis::DriveType,
                AttributeAxis::InstallationDifficulty,
            ],
            BranchKey::Turbochargers => &[
                AttributeAxis::FuelType,
                AttributeAxis::InstallationDifficulty,
            ],
        }
    }
}

impl std::fmt::Display for BranchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
