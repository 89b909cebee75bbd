//! 단위 정의 및 변환 모듈 모음.

pub mod table;
pub mod temperature;

pub use table::{UnitTable, STANDARD_TABLE};
pub use temperature::{convert_temperature, TemperatureUnit};
