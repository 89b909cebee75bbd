use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{Conversion, Converter};
use crate::quantity::ConversionRequest;
use crate::units::UnitTable;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    ListCategories,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Master Unit Converter ===");
    println!("1) Convert a value");
    println!("2) List categories");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::ListCategories),
            "0" | "q" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid choice, try again."),
        }
    }
}

/// 카테고리 → 값 → 원래 단위 → 대상 단위 순서로 입력받아 결과를 출력한다.
pub fn handle_conversion(cfg: &Config, converter: &Converter<'_>) -> Result<(), AppError> {
    let table = converter.table();
    let categories = table.categories();
    let initial = cfg
        .initial_category(table)
        .and_then(|name| categories.iter().position(|c| *c == name))
        .unwrap_or(0);

    println!("\n-- Variable --");
    let idx = choose("Category", &categories, initial)?;
    let category = categories[idx];

    let value = read_f64_or("Value", cfg.default_value)?;

    let units = table.units_for(category)?;
    let (from_default, to_default) = table.default_units(category)?;
    let from_idx = units.iter().position(|u| *u == from_default).unwrap_or(0);
    let to_idx = units.iter().position(|u| *u == to_default).unwrap_or(0);
    let from = units[choose("From", &units, from_idx)?];
    let to = units[choose("To", &units, to_idx)?];

    let request = ConversionRequest::new(category, value, from, to);
    let result = converter.convert_request(&request, &cfg.format)?;
    println!("Result: {}", render_result(&result));
    Ok(())
}

/// 카테고리와 단위 목록을 출력한다.
pub fn print_categories(table: &UnitTable) {
    for cat in table.iter() {
        let base = cat.base_unit().unwrap_or("-");
        println!("{:<12} base {:<6} {}", cat.name, base, cat.unit_symbols().join(", "));
    }
}

pub fn render_result(result: &Conversion) -> String {
    format!("{} {}", result.display, result.unit)
}

/// "3" 같은 1-기반 번호를 목록 인덱스로 바꾼다. 빈 입력은 기본값을 쓴다.
pub fn parse_selection(input: &str, len: usize, default: usize) -> Option<usize> {
    let s = input.trim();
    if s.is_empty() {
        return (default < len).then_some(default);
    }
    match s.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn choose(label: &str, options: &[&str], default: usize) -> Result<usize, AppError> {
    for (i, opt) in options.iter().enumerate() {
        let marker = if i == default { "*" } else { " " };
        println!("{marker}{:>2}) {opt}", i + 1);
    }
    loop {
        let sel = read_line(&format!("{label} [{}]: ", default + 1))?;
        match parse_selection(&sel, options.len(), default) {
            Some(idx) => return Ok(idx),
            None => println!("Enter a number between 1 and {}.", options.len()),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    Ok(buf)
}

fn read_f64_or(label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.replace(',', "").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Enter a number."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_one_based() {
        assert_eq!(parse_selection("1", 3, 0), Some(0));
        assert_eq!(parse_selection(" 3 \n", 3, 0), Some(2));
        assert_eq!(parse_selection("4", 3, 0), None);
        assert_eq!(parse_selection("0", 3, 0), None);
        assert_eq!(parse_selection("ft", 3, 0), None);
    }

    #[test]
    fn empty_selection_takes_default() {
        assert_eq!(parse_selection("\n", 4, 1), Some(1));
        assert_eq!(parse_selection("", 0, 0), None);
    }

    #[test]
    fn result_line_has_value_then_unit() {
        let conv = Converter::default();
        let req = ConversionRequest::new("Length", 1.0, "ft", "m");
        let out = conv
            .convert_request(&req, &crate::format::FormatPolicy::default())
            .unwrap();
        assert_eq!(render_result(&out), "0.3048 m");
    }
}
