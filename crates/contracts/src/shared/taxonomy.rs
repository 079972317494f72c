//! Статическое дерево классификации запчастей: главная категория ->
//! подкатегория -> теги листового уровня.
//!
//! Используется в админских пикерах категорий и в фильтрах витрины.
//! Данные не меняются во время работы.

use crate::enums::{BranchKey, MainCategory};

type SubTree = &'static [(&'static str, &'static [&'static str])];

const ENGINE_DRIVETRAIN: SubTree = &[
    (
        "engines",
        &[
            "complete-engines",
            "long-blocks",
            "short-blocks",
            "cylinder-heads",
            "pistons-rings",
            "crankshafts",
            "camshafts",
            "gaskets-seals",
        ],
    ),
    (
        "turbochargers",
        &[
            "turbos",
            "wastegates",
            "blow-off-valves",
            "turbo-manifolds",
            "lines-fittings",
            "gaskets-hardware",
        ],
    ),
    (
        "transmissions",
        &[
            "manual-gearboxes",
            "automatic-gearboxes",
            "clutch-kits",
            "flywheels",
            "shifters",
        ],
    ),
    (
        "exhaust",
        &["headers", "downpipes", "cat-back-systems", "mufflers", "catalytic-converters"],
    ),
    (
        "cooling",
        &["radiators", "intercoolers", "water-pumps", "thermostats", "hoses"],
    ),
    (
        "fuel-system",
        &["fuel-pumps", "injectors", "fuel-rails", "pressure-regulators"],
    ),
];

const WHEELS: SubTree = &[
    (
        "wheels",
        &["alloy-wheels", "steel-wheels", "forged-wheels", "spare-wheels"],
    ),
    (
        "tires",
        &["summer-tires", "winter-tires", "all-season-tires", "performance-tires"],
    ),
    (
        "wheel-accessories",
        &["lug-nuts", "wheel-locks", "spacers-adapters", "center-caps", "tpms-sensors"],
    ),
];

const SUSPENSION_BRAKES: SubTree = &[
    (
        "suspension",
        &["coilovers", "shocks-struts", "springs", "control-arms", "sway-bars", "bushings"],
    ),
    (
        "brakes",
        &["brake-pads", "rotors", "calipers", "big-brake-kits", "brake-lines"],
    ),
    (
        "steering",
        &["steering-racks", "tie-rods", "power-steering-pumps"],
    ),
];

const BODY_EXTERIOR: SubTree = &[
    (
        "body-panels",
        &["bumpers", "fenders", "hoods", "doors", "trunk-lids"],
    ),
    (
        "lighting",
        &["headlights", "tail-lights", "fog-lights", "bulbs"],
    ),
    (
        "aero",
        &["spoilers", "splitters", "diffusers", "side-skirts"],
    ),
    ("mirrors-glass", &["mirrors", "windshields", "windows"]),
];

const INTERIOR_ELECTRONICS: SubTree = &[
    (
        "interior",
        &["seats", "steering-wheels", "shift-knobs", "floor-mats", "trim"],
    ),
    (
        "electronics",
        &["ecus", "gauges", "sensors", "wiring-harnesses", "batteries"],
    ),
    (
        "audio-navigation",
        &["head-units", "speakers", "amplifiers", "cameras"],
    ),
];

fn subtree(main: MainCategory) -> SubTree {
    match main {
        MainCategory::EngineDrivetrain => ENGINE_DRIVETRAIN,
        MainCategory::Wheels => WHEELS,
        MainCategory::SuspensionBrakes => SUSPENSION_BRAKES,
        MainCategory::BodyExterior => BODY_EXTERIOR,
        MainCategory::InteriorElectronics => INTERIOR_ELECTRONICS,
    }
}

/// Подкатегории главной категории в порядке отображения.
/// Для неизвестного или пустого slug возвращает пустой список.
pub fn get_subcategories(main: Option<&str>) -> Vec<&'static str> {
    main.and_then(MainCategory::from_slug)
        .map(|main| subtree(main).iter().map(|(sub, _)| *sub).collect())
        .unwrap_or_default()
}

/// Теги листового уровня для пары (главная, подкатегория)
pub fn get_deep_categories(main: Option<&str>, sub: Option<&str>) -> Vec<&'static str> {
    let (Some(main), Some(sub)) = (main.and_then(MainCategory::from_slug), sub) else {
        return Vec::new();
    };

    subtree(main)
        .iter()
        .find(|(key, _)| *key == sub)
        .map(|(_, leaves)| leaves.to_vec())
        .unwrap_or_default()
}

/// Определение ветки фильтров по паре (главная, подкатегория).
///
/// Порядок проверок важен: `wheels` проверяется первым и по обеим осям,
/// затем `engines` и `turbochargers` только по подкатегории.
/// Пустые строки считаются отсутствующими значениями.
pub fn resolve_branch(main: Option<&str>, sub: Option<&str>) -> BranchKey {
    let main = main.filter(|s| !s.is_empty());
    let sub = sub.filter(|s| !s.is_empty());

    match (main, sub) {
        (None, None) => BranchKey::Global,
        (Some("wheels"), _) | (_, Some("wheels")) => BranchKey::Wheels,
        (_, Some("engines")) => BranchKey::Engines,
        (_, Some("turbochargers")) => BranchKey::Turbochargers,
        _ => BranchKey::Global,
    }
}
