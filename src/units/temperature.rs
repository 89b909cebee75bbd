use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 섭씨/화씨 두 가지만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// 표기 기호 또는 별칭(`C`, `celsius`, `degF` 등)을 단위로 변환한다.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s == "°C" || s == "℃" {
            return Some(TemperatureUnit::Celsius);
        }
        if s == "°F" || s == "℉" {
            return Some(TemperatureUnit::Fahrenheit);
        }
        match s.to_lowercase().as_str() {
            "c" | "degc" | "celsius" | "°c" => Some(TemperatureUnit::Celsius),
            "f" | "degf" | "fahrenheit" | "°f" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

/// 화씨를 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
/// 같은 단위끼리는 섭씨를 거치지 않고 값을 그대로 돌려준다(왕복 오차 방지).
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    let c = to_celsius(value, from);
    from_celsius(c, to)
}
