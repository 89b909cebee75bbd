use tracing::debug;

use crate::format::FormatPolicy;
use crate::quantity::ConversionRequest;
use crate::units::{convert_temperature, UnitTable};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 환산표에 없는 카테고리
    UnknownCategory(String),
    /// 카테고리에 속하지 않는 단위
    UnknownUnit { category: String, unit: String },
    /// 배율이 정의되지 않은(온도) 카테고리에 배율을 요청함
    NonLinearCategory(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownCategory(c) => write!(f, "unknown category: {c}"),
            ConversionError::UnknownUnit { category, unit } => {
                write!(f, "unknown unit for {category}: {unit}")
            }
            ConversionError::NonLinearCategory(c) => {
                write!(f, "{c} has no linear scale factors")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 변환 결과와 표시 문자열.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub display: String,
    pub unit: &'static str,
}

/// 환산표를 참조해 값을 변환한다. 내부 상태가 없으므로 여러 곳에서 동시에 써도 된다.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    table: &'a UnitTable,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Converter::new(UnitTable::standard())
    }
}

impl<'a> Converter<'a> {
    pub fn new(table: &'a UnitTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a UnitTable {
        self.table
    }

    /// 배율 변환: `value * (factor_from / factor_to)`.
    /// 같은 단위끼리는 비율이 정확히 1 이므로 값이 그대로 유지된다.
    pub fn convert_linear(
        &self,
        value: f64,
        category: &str,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, ConversionError> {
        let from = self.table.linear_unit(category, from_unit)?;
        let to = self.table.linear_unit(category, to_unit)?;
        if from.symbol == to.symbol {
            return Ok(value);
        }
        Ok(value * (from.factor / to.factor))
    }

    /// 섭씨/화씨 변환. 두 단위 외에는 `UnknownUnit` 오류를 돌려준다.
    pub fn convert_temperature(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, ConversionError> {
        let category = self
            .table
            .iter()
            .find(|c| !c.is_linear())
            .map(|c| c.name)
            .ok_or_else(|| ConversionError::UnknownCategory("Temperature".to_string()))?;
        let from = self.table.temperature_unit(category, from_unit)?;
        let to = self.table.temperature_unit(category, to_unit)?;
        Ok(convert_temperature(value, from, to))
    }

    /// 카테고리 종류에 따라 선형/온도 변환으로 분기한다.
    pub fn convert(
        &self,
        category: &str,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, ConversionError> {
        let cat = self.table.category(category)?;
        let result = if cat.is_linear() {
            self.convert_linear(value, cat.name, from_unit, to_unit)?
        } else {
            let from = self.table.temperature_unit(cat.name, from_unit)?;
            let to = self.table.temperature_unit(cat.name, to_unit)?;
            convert_temperature(value, from, to)
        };
        debug!(
            category = cat.name,
            value,
            from = from_unit,
            to = to_unit,
            result,
            "converted"
        );
        Ok(result)
    }

    /// 요청 하나를 변환하고 표시 문자열까지 만든다.
    pub fn convert_request(
        &self,
        request: &ConversionRequest,
        policy: &FormatPolicy,
    ) -> Result<Conversion, ConversionError> {
        let value = self.convert(
            &request.category,
            request.value,
            &request.from_unit,
            &request.to_unit,
        )?;
        let unit = self.table.resolve_unit(&request.category, &request.to_unit)?;
        Ok(Conversion {
            value,
            display: policy.format(value),
            unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_unit_returns_input_exactly() {
        let conv = Converter::default();
        for v in [0.1 + 0.2, -7.25, 1e-300, 123456.789] {
            let out = conv.convert("Flow", v, "CFM", "cfm").unwrap();
            assert_eq!(out.to_bits(), v.to_bits());
        }
    }

    #[test]
    fn convert_linear_rejects_unknown_unit() {
        let conv = Converter::default();
        let err = conv.convert_linear(1.0, "Length", "ft", "cubit").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                category: "Length".into(),
                unit: "cubit".into()
            }
        );
    }

    #[test]
    fn convert_temperature_rejects_kelvin() {
        let conv = Converter::default();
        assert!(matches!(
            conv.convert_temperature(300.0, "K", "°C"),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn temperature_units_are_not_valid_elsewhere() {
        let conv = Converter::default();
        assert!(conv.convert("Length", 1.0, "°C", "m").is_err());
        assert!(conv.convert("Temperature", 1.0, "m", "°C").is_err());
    }

    #[test]
    fn convert_request_resolves_alias_to_symbol() {
        let conv = Converter::default();
        let req = ConversionRequest::new("pressure", 1.0, "atm", "pa");
        let out = conv.convert_request(&req, &FormatPolicy::default()).unwrap();
        assert_eq!(out.unit, "Pa");
        assert_eq!(out.display, "101,325");
    }
}
