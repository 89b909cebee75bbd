use tracing::warn;

use crate::conversion::ConversionError;
use crate::quantity::{Category, LinearUnit, Units};
use crate::units::TemperatureUnit;

const FLOW: &[LinearUnit] = &[
    LinearUnit::new("m³/s", 1.0, &["m3/s", "m3/sec"]),
    LinearUnit::new("CFM", 0.0004719, &["ft3/min"]),
    LinearUnit::new("m³/hr", 1.0 / 3600.0, &["m3/h", "m3/hr"]),
    LinearUnit::new("l/s", 0.001, &["lps", "l/sec"]),
    LinearUnit::new("l/min", 1.0 / 60000.0, &["lpm"]),
];

const VOLUME: &[LinearUnit] = &[
    LinearUnit::new("m³", 1.0, &["m3"]),
    LinearUnit::new("ft³", 0.028317, &["ft3", "cuft"]),
    LinearUnit::new("in³", 0.00001639, &["in3", "cuin"]),
    LinearUnit::new("L", 0.001, &["liter", "litre"]),
];

const SPEED: &[LinearUnit] = &[
    LinearUnit::new("m/s", 1.0, &["mps"]),
    LinearUnit::new("fpm", 0.00508, &["ft/min"]),
    LinearUnit::new("m/min", 0.0166667, &[]),
    LinearUnit::new("fps", 0.3048, &["ft/s"]),
];

const PRESSURE: &[LinearUnit] = &[
    LinearUnit::new("Pa", 1.0, &["pascal"]),
    LinearUnit::new("inH₂O", 248.84, &["inh2o", "inwc"]),
    LinearUnit::new("inHg", 3386.4, &[]),
    LinearUnit::new("mmH₂O", 9.80665, &["mmh2o", "mmwc"]),
    LinearUnit::new("mmHg", 133.32, &["torr"]),
    LinearUnit::new("psi", 6894.76, &[]),
    LinearUnit::new("atm", 101325.0, &[]),
];

const AREA: &[LinearUnit] = &[
    LinearUnit::new("m²", 1.0, &["m2", "sqm"]),
    LinearUnit::new("ft²", 0.092903, &["ft2", "sqft"]),
    LinearUnit::new("in²", 0.00064516, &["in2", "sqin"]),
    LinearUnit::new("mm²", 0.000001, &["mm2"]),
];

const DENSITY: &[LinearUnit] = &[
    LinearUnit::new("kg/m³", 1.0, &["kg/m3"]),
    LinearUnit::new("lb/ft³", 16.0185, &["lb/ft3", "pcf"]),
];

const LENGTH: &[LinearUnit] = &[
    LinearUnit::new("m", 1.0, &["meter", "metre"]),
    LinearUnit::new("ft", 0.3048, &["foot", "feet"]),
    LinearUnit::new("in", 0.0254, &["inch"]),
    LinearUnit::new("mm", 0.001, &[]),
];

const WEIGHT: &[LinearUnit] = &[
    LinearUnit::new("kg", 1.0, &[]),
    LinearUnit::new("lb", 0.45359, &["lbs"]),
    LinearUnit::new("oz", 0.0283495, &[]),
    LinearUnit::new("g", 0.001, &["gram"]),
];

const POWER: &[LinearUnit] = &[
    LinearUnit::new("W", 1.0, &["watt"]),
    LinearUnit::new("kW", 1000.0, &[]),
    LinearUnit::new("HP", 745.7, &[]),
];

const CATEGORIES: &[Category] = &[
    Category::linear("Flow", FLOW),
    Category::linear("Volume", VOLUME),
    Category::linear("Speed", SPEED),
    Category::linear("Pressure", PRESSURE),
    Category::linear("Area", AREA),
    Category::linear("Density", DENSITY),
    Category::linear("Length", LENGTH),
    Category::linear("Weight", WEIGHT),
    Category::linear("Power", POWER),
    Category::temperature("Temperature", &TemperatureUnit::ALL),
];

/// 기본 환산표. 프로세스 전체에서 한 번만 정의되고 변경되지 않는다.
pub static STANDARD_TABLE: UnitTable = UnitTable::new(CATEGORIES);

/// 카테고리/단위/환산계수를 보관하는 불변 환산표.
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    categories: &'static [Category],
}

impl UnitTable {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    pub fn standard() -> &'static UnitTable {
        &STANDARD_TABLE
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Category> {
        self.categories.iter()
    }

    /// 카테고리 이름을 정의된 순서대로 돌려준다.
    pub fn categories(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }

    /// 이름(대소문자 무시)으로 카테고리를 찾는다.
    pub fn category(&self, name: &str) -> Result<&'static Category, ConversionError> {
        let name = name.trim();
        self.categories
            .iter()
            .find(|c| c.name == name)
            .or_else(|| self.categories.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
            .ok_or_else(|| {
                warn!(category = name, "unknown category");
                ConversionError::UnknownCategory(name.to_string())
            })
    }

    pub fn units_for(&self, category: &str) -> Result<Vec<&'static str>, ConversionError> {
        Ok(self.category(category)?.unit_symbols())
    }

    pub fn is_linear(&self, category: &str) -> Result<bool, ConversionError> {
        Ok(self.category(category)?.is_linear())
    }

    /// 선형 카테고리의 단위 정의를 찾는다. 정확한 기호가 별칭보다 우선한다.
    pub fn linear_unit(
        &self,
        category: &str,
        unit: &str,
    ) -> Result<&'static LinearUnit, ConversionError> {
        let cat = self.category(category)?;
        let units = match cat.units {
            Units::Linear(units) => units,
            Units::Temperature(_) => {
                return Err(ConversionError::NonLinearCategory(cat.name.to_string()))
            }
        };
        let unit = unit.trim();
        units
            .iter()
            .find(|u| u.symbol == unit)
            .or_else(|| units.iter().find(|u| u.matches(unit)))
            .ok_or_else(|| unknown_unit(cat, unit))
    }

    /// "1 unit = factor × 기준 단위" 의 factor 를 돌려준다.
    pub fn factor_for(&self, category: &str, unit: &str) -> Result<f64, ConversionError> {
        Ok(self.linear_unit(category, unit)?.factor)
    }

    /// 온도 카테고리의 단위를 찾는다.
    pub fn temperature_unit(
        &self,
        category: &str,
        unit: &str,
    ) -> Result<TemperatureUnit, ConversionError> {
        let cat = self.category(category)?;
        match cat.units {
            Units::Temperature(units) => TemperatureUnit::parse(unit)
                .filter(|u| units.contains(u))
                .ok_or_else(|| unknown_unit(cat, unit)),
            Units::Linear(_) => Err(unknown_unit(cat, unit)),
        }
    }

    /// 별칭으로 입력된 단위를 화면 표기 기호로 바꾼다.
    pub fn resolve_unit(&self, category: &str, unit: &str) -> Result<&'static str, ConversionError> {
        if self.is_linear(category)? {
            Ok(self.linear_unit(category, unit)?.symbol)
        } else {
            Ok(self.temperature_unit(category, unit)?.symbol())
        }
    }

    /// 폼의 초기 선택값: 첫 번째 단위 → 두 번째 단위 (단위가 하나면 같은 단위).
    pub fn default_units(
        &self,
        category: &str,
    ) -> Result<(&'static str, &'static str), ConversionError> {
        let units = self.units_for(category)?;
        let from = units
            .first()
            .copied()
            .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
        let to = units.get(1).copied().unwrap_or(from);
        Ok((from, to))
    }

    /// 처음 선택되는 카테고리 (목록의 첫 항목).
    pub fn default_category(&self) -> Option<&'static Category> {
        self.categories.first()
    }
}

fn unknown_unit(category: &Category, unit: &str) -> ConversionError {
    warn!(category = category.name, unit, "unknown unit");
    ConversionError::UnknownUnit {
        category: category.name.to_string(),
        unit: unit.to_string(),
    }
}
