use crate::config::Config;
use crate::conversion::{self, Converter};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "conversion error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 대화형 CLI 의 메인 루프를 실행한다.
pub fn run(config: &Config, converter: &Converter<'_>) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Convert => ui_cli::handle_conversion(config, converter)?,
            MenuChoice::ListCategories => ui_cli::print_categories(converter.table()),
            MenuChoice::Exit => {
                println!("Bye.");
                break;
            }
        }
    }
    Ok(())
}
