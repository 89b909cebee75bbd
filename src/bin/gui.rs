#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path};
use master_unit_converter::{config, logging, Converter, UnitTable};
use tracing::{info, warn};

const LOGO_SEARCH: [&str; 3] = ["logo.png", "assets/logo.png", "../logo.png"];

const RESULT_FILL: egui::Color32 = egui::Color32::from_rgb(236, 253, 245);
const RESULT_BORDER: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
const RESULT_TEXT: egui::Color32 = egui::Color32::from_rgb(4, 120, 87);
const RESULT_UNIT: egui::Color32 = egui::Color32::from_rgb(6, 95, 70);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);

fn main() -> Result<(), eframe::Error> {
    logging::init_logging("warn");

    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config ignored, using defaults");
            config::Config::default()
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Master Unit Converter")
        .with_inner_size(egui::vec2(1000.0, 640.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    info!("starting GUI");
    eframe::run_native(
        "Master Unit Converter",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn find_logo() -> Option<&'static str> {
    LOGO_SEARCH.iter().copied().find(|p| Path::new(p).exists())
}

/// 로고 PNG 를 RGBA 픽셀과 크기로 읽는다.
fn load_logo_rgba(path: &str) -> Option<(Vec<u8>, [u32; 2])> {
    let bytes = fs::read(path).ok()?;
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!(path, error = %e, "logo could not be decoded");
            return None;
        }
    };
    let (w, h) = img.dimensions();
    Some((img.to_rgba8().into_raw(), [w, h]))
}

fn load_app_icon() -> Option<egui::IconData> {
    let (rgba, [width, height]) = load_logo_rgba(find_logo()?)?;
    Some(egui::IconData {
        rgba,
        width,
        height,
    })
}

/// 결과 상자에 그릴 내용.
#[derive(Debug, Clone, PartialEq)]
enum ResultView {
    Value { display: String, unit: &'static str },
    Error(String),
}

struct GuiApp {
    converter: Converter<'static>,
    config: config::Config,
    category: &'static str,
    value: f64,
    from_unit: &'static str,
    to_unit: &'static str,
    logo: Option<egui::TextureHandle>,
    logo_checked: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let table = UnitTable::standard();
        let category = config.initial_category(table).unwrap_or("Length");
        let mut app = Self {
            converter: Converter::new(table),
            value: config.default_value,
            config,
            category,
            from_unit: "",
            to_unit: "",
            logo: None,
            logo_checked: false,
        };
        app.select_category(category);
        app
    }

    /// 카테고리를 바꾸고 단위 선택을 기본값(첫 번째 → 두 번째)으로 되돌린다.
    fn select_category(&mut self, name: &'static str) {
        self.category = name;
        match self.converter.table().default_units(name) {
            Ok((from, to)) => {
                self.from_unit = from;
                self.to_unit = to;
            }
            Err(e) => warn!(category = name, error = %e, "no default units"),
        }
    }

    fn result_view(&self) -> ResultView {
        match self
            .converter
            .convert(self.category, self.value, self.from_unit, self.to_unit)
        {
            Ok(v) => ResultView::Value {
                display: self.config.format.format(v),
                unit: self.to_unit,
            },
            Err(e) => ResultView::Error(e.to_string()),
        }
    }

    fn ensure_logo(&mut self, ctx: &egui::Context) {
        if self.logo_checked {
            return;
        }
        self.logo_checked = true;
        if let Some((rgba, [w, h])) = find_logo().and_then(load_logo_rgba) {
            let image = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &rgba);
            self.logo = Some(ctx.load_texture("logo", image, egui::TextureOptions::LINEAR));
        }
    }

    /// 로고와 카테고리 선택을 담은 사이드바.
    fn ui_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        match &self.logo {
            Some(texture) => {
                let size = texture.size_vec2();
                let width = ui.available_width().min(size.x);
                let scaled = egui::vec2(width, size.y * width / size.x.max(1.0));
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    scaled,
                )));
            }
            None => {
                ui.heading("⚙ Master Converter");
            }
        }
        ui.separator();
        ui.label(egui::RichText::new("VARIABLE").strong());
        ui.add_space(4.0);
        let mut selected = self.category;
        for name in self.converter.table().categories() {
            ui.radio_value(&mut selected, name, name);
        }
        if selected != self.category {
            self.select_category(selected);
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        ui.heading(egui::RichText::new("Conversion Calculator").strong());
        ui.label(
            egui::RichText::new(format!("Configuring: {}", self.category))
                .color(egui::Color32::from_rgb(59, 130, 246)),
        );
        ui.separator();

        let units = self
            .converter
            .table()
            .units_for(self.category)
            .unwrap_or_default();

        ui.columns(2, |cols| {
            let left = &mut cols[0];
            left.heading("1. Enter value");
            left.add(
                egui::DragValue::new(&mut self.value)
                    .speed(1.0)
                    .max_decimals(self.config.format.decimals),
            );
            left.add_space(12.0);
            left.heading("2. From unit");
            left.horizontal_wrapped(|ui| {
                for unit in &units {
                    ui.selectable_value(&mut self.from_unit, *unit, *unit);
                }
            });
            left.add_space(12.0);
            left.heading("3. To unit");
            left.horizontal_wrapped(|ui| {
                for unit in &units {
                    ui.selectable_value(&mut self.to_unit, *unit, *unit);
                }
            });

            let view = self.result_view();
            result_box(&mut cols[1], &view);
        });
    }
}

fn result_box(ui: &mut egui::Ui, view: &ResultView) {
    egui::Frame::none()
        .fill(RESULT_FILL)
        .stroke(egui::Stroke::new(2.0, RESULT_BORDER))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(20.0, 40.0))
        .show(ui, |ui| {
            ui.set_min_height(250.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("FINAL RESULT")
                        .size(14.0)
                        .color(egui::Color32::from_rgb(100, 116, 139)),
                );
                ui.add_space(10.0);
                match view {
                    ResultView::Value { display, unit } => {
                        ui.label(
                            egui::RichText::new(display)
                                .size(44.0)
                                .strong()
                                .color(RESULT_TEXT),
                        );
                        ui.add_space(15.0);
                        ui.label(
                            egui::RichText::new(*unit)
                                .size(22.0)
                                .strong()
                                .color(RESULT_UNIT),
                        );
                    }
                    ResultView::Error(msg) => {
                        ui.label(egui::RichText::new(msg).size(16.0).color(ERROR_TEXT));
                    }
                }
            });
        });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.ensure_logo(ctx);

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .min_width(160.0)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.ui_sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_form(ui));
        });
    }
}
