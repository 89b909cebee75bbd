use serde::{Deserialize, Serialize};

use crate::units::TemperatureUnit;

/// 선형 카테고리의 단위 하나. `factor`는 "1 단위 = factor × 기준 단위"를 뜻한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub symbol: &'static str,
    pub factor: f64,
    /// 키보드로 입력하기 쉬운 ASCII 별칭. 대소문자를 구분하지 않는다.
    pub aliases: &'static [&'static str],
}

impl LinearUnit {
    pub const fn new(symbol: &'static str, factor: f64, aliases: &'static [&'static str]) -> Self {
        Self {
            symbol,
            factor,
            aliases,
        }
    }

    /// 표기 기호 또는 별칭 중 하나와 일치하는지 확인한다. ASCII 대소문자는 무시한다.
    pub fn matches(&self, name: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// 카테고리가 어떤 방식으로 변환되는지를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Units {
    /// 배율만으로 변환 가능한 단위 목록
    Linear(&'static [LinearUnit]),
    /// 오프셋이 필요한 온도 단위 목록
    Temperature(&'static [TemperatureUnit]),
}

/// 물리량 카테고리 (유량, 압력, 온도 등).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub units: Units,
}

impl Category {
    pub const fn linear(name: &'static str, units: &'static [LinearUnit]) -> Self {
        Self {
            name,
            units: Units::Linear(units),
        }
    }

    pub const fn temperature(name: &'static str, units: &'static [TemperatureUnit]) -> Self {
        Self {
            name,
            units: Units::Temperature(units),
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self.units, Units::Linear(_))
    }

    /// 화면에 표시할 순서대로 단위 기호를 돌려준다.
    pub fn unit_symbols(&self) -> Vec<&'static str> {
        match self.units {
            Units::Linear(units) => units.iter().map(|u| u.symbol).collect(),
            Units::Temperature(units) => units.iter().map(|u| u.symbol()).collect(),
        }
    }

    /// factor == 1.0 인 기준 단위. 온도는 기준 단위가 없다.
    pub fn base_unit(&self) -> Option<&'static str> {
        match self.units {
            Units::Linear(units) => units.iter().find(|u| u.factor == 1.0).map(|u| u.symbol),
            Units::Temperature(_) => None,
        }
    }
}

/// 사용자 입력 한 번에 해당하는 변환 요청. 결과를 만든 뒤 버려진다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        category: impl Into<String>,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}
