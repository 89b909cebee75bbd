//! 환산 엔진을 라이브러리로 분리하여 CLI 와 GUI 가 같은 로직을 공유한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use conversion::{ConversionError, Converter};
pub use format::{format_result, FormatPolicy};
pub use quantity::ConversionRequest;
pub use units::UnitTable;

/// 카테고리 이름 목록 (정의 순서 유지).
pub fn list_categories() -> Vec<&'static str> {
    UnitTable::standard().categories()
}

/// 카테고리의 단위 목록.
pub fn list_units(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    UnitTable::standard().units_for(category)
}

/// 기본 환산표로 값을 변환한다.
pub fn convert(
    category: &str,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    Converter::default().convert(category, value, from_unit, to_unit)
}
