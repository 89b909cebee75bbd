//! 환산 엔진의 항등/왕복 법칙과 대표 값 회귀 테스트.
use master_unit_converter::{
    convert, list_categories, list_units, ConversionError, Converter, UnitTable,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

const SAMPLES: [f64; 7] = [0.0, 1.0, -1.0, 0.1 + 0.2, 42.5, -273.15, 1.0e6];

#[test]
fn same_unit_is_identity_for_every_unit() {
    for category in list_categories() {
        for unit in list_units(category).unwrap() {
            for v in SAMPLES {
                let out = convert(category, v, unit, unit).unwrap();
                assert_eq!(out.to_bits(), v.to_bits(), "{category} {unit} {v}");
            }
        }
    }
}

#[test]
fn linear_round_trip_returns_original() {
    let table = UnitTable::standard();
    let conv = Converter::new(table);
    for cat in table.iter().filter(|c| c.is_linear()) {
        let units = cat.unit_symbols();
        for a in &units {
            for b in &units {
                for v in SAMPLES {
                    let there = conv.convert(cat.name, v, a, b).unwrap();
                    let back = conv.convert(cat.name, there, b, a).unwrap();
                    assert_close(&format!("{} {a}->{b}", cat.name), back, v, 1e-12);
                }
            }
        }
    }
}

#[test]
fn temperature_round_trip_returns_original() {
    for v in SAMPLES {
        let f = convert("Temperature", v, "°C", "°F").unwrap();
        let c = convert("Temperature", f, "°F", "°C").unwrap();
        assert_close("°C->°F->°C", c, v, 1e-12);
    }
}

#[test]
fn temperature_reference_points() {
    let conv = Converter::default();
    assert_eq!(conv.convert_temperature(0.0, "°C", "°F").unwrap(), 32.0);
    assert_eq!(conv.convert_temperature(212.0, "°F", "°C").unwrap(), 100.0);
    assert_close(
        "body",
        conv.convert_temperature(98.6, "°F", "°C").unwrap(),
        37.0,
        1e-12,
    );
}

#[test]
fn length_reference_values() {
    assert_close("ft->m", convert("Length", 1.0, "ft", "m").unwrap(), 0.3048, 1e-15);
    assert_eq!(convert("Length", 10.0, "mm", "mm").unwrap(), 10.0);
    assert_close("in->mm", convert("Length", 1.0, "in", "mm").unwrap(), 25.4, 1e-12);
}

#[test]
fn engineering_reference_values() {
    assert_close(
        "atm->psi",
        convert("Pressure", 1.0, "atm", "psi").unwrap(),
        14.6959,
        1e-5,
    );
    assert_close(
        "m3/s->m3/hr",
        convert("Flow", 1.0, "m³/s", "m³/hr").unwrap(),
        3600.0,
        1e-12,
    );
    assert_close(
        "l/min->l/s",
        convert("Flow", 60.0, "l/min", "l/s").unwrap(),
        1.0,
        1e-12,
    );
    assert_close("HP->kW", convert("Power", 1.0, "HP", "kW").unwrap(), 0.7457, 1e-12);
    assert_close(
        "lb/ft3->kg/m3",
        convert("Density", 2.0, "lb/ft³", "kg/m³").unwrap(),
        32.037,
        1e-12,
    );
}

#[test]
fn negative_and_non_finite_inputs_pass_through() {
    assert_close("neg", convert("Weight", -2.0, "kg", "g").unwrap(), -2000.0, 1e-12);
    assert!(convert("Area", f64::NAN, "m²", "ft²").unwrap().is_nan());
    assert_eq!(
        convert("Speed", f64::INFINITY, "fps", "m/s").unwrap(),
        f64::INFINITY
    );
}

#[test]
fn unknown_unit_is_an_error_not_zero() {
    let err = convert("Length", 1.0, "ft", "parsec").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            category: "Length".into(),
            unit: "parsec".into()
        }
    );
    // 다른 카테고리의 단위도 허용하지 않는다.
    assert!(convert("Length", 1.0, "kg", "m").is_err());
}

#[test]
fn unknown_category_is_an_error() {
    assert_eq!(
        list_units("Luminosity").unwrap_err(),
        ConversionError::UnknownCategory("Luminosity".into())
    );
    assert!(convert("Luminosity", 1.0, "cd", "lm").is_err());
}

#[test]
fn ten_categories_each_with_units() {
    let categories = list_categories();
    assert_eq!(categories.len(), 10);
    for category in categories {
        assert!(!list_units(category).unwrap().is_empty(), "{category}");
    }
}

#[test]
fn converter_is_shareable_across_threads() {
    let conv = Converter::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| s.spawn(move || conv.convert("Length", i as f64, "m", "mm").unwrap()))
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), i as f64 * 1000.0);
        }
    });
}
