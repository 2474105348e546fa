#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use carbon_footprint_calculator::{
    config,
    footprint::{self, ChartSlice, FootprintReport, MeatFrequency, DAILY_TARGET_KG},
    form::{FormEdit, FormState, INPUT_STEP},
    i18n::{self, keys},
    logging,
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

/// 파이 조각을 나눌 최대 각도 [deg]. 조각마다 볼록 삼각형으로 그린다.
const PIE_SEGMENT_DEG: f64 = 5.0;
const PIE_RADIUS: f32 = 110.0;
const CLIMATE_ACTION_URL: &str = "https://www.un.org/en/climatechange";

/// 탄소 발자국 계산기(GUI).
#[derive(Debug, Parser)]
#[command(name = "carbon_footprint_calculator", version, about)]
struct GuiArgs {
    /// 언어 (auto/en-us/ko-kr). 설정 파일 값보다 우선한다.
    #[arg(long, short = 'L')]
    lang: Option<String>,

    /// tracing 필터 (예: info, carbon_footprint_calculator=debug)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();

    let app_cfg_result = config::load_or_default();
    let log_default = app_cfg_result
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "warn".into());
    logging::init(args.log.as_deref(), &log_default);
    let mut app_cfg = app_cfg_result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        config::Config::default()
    });
    if let Some(lang_cli) = args.lang {
        app_cfg.language = lang_cli;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 760.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Carbon Footprint Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx, app_cfg.font_path.as_deref()) {
                tracing::warn!(error = %e, "CJK font not loaded");
            }
            cc.egui_ctx.set_pixels_per_point(app_cfg.ui_scale);
            Box::new(GuiApp::new(app_cfg))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    tracing::debug!(path = %path, w, h, "app icon loaded");
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 폰트(이모지 포함) 뒤에 두어 한글만 대체 폰트로 그린다.
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위한 폰트를 찾는다.
/// 1) 설정의 사용자 폰트
/// 2) assets/fonts/ 아래 폰트
/// 3) 시스템 폰트(Windows/macOS/Linux)
fn setup_fonts(ctx: &egui::Context, user_font: Option<&str>) -> Result<(), String> {
    if let Some(path) = user_font {
        match load_custom_font(ctx, path) {
            Ok(()) => return Ok(()),
            Err(e) => tracing::warn!(error = %e, "user font rejected"),
        }
    }

    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/NanumGothic.ttf".into(),
        "assets/fonts/malgun.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.extend(
        [
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        ]
        .into_iter()
        .map(std::path::PathBuf::from),
    );

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            tracing::debug!(path = %p.display(), "font loaded");
            return Ok(());
        }
    }

    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 수학 좌표계 각도(반시계, 0°=3시)를 화면 좌표로 바꾼다.
fn polar(center: egui::Pos2, radius: f32, deg: f64) -> egui::Pos2 {
    let rad = deg.to_radians();
    egui::pos2(
        center.x + radius * rad.cos() as f32,
        center.y - radius * rad.sin() as f32,
    )
}

/// 파이 조각을 볼록 삼각형 목록으로 나눈다.
fn wedge_triangles(
    center: egui::Pos2,
    radius: f32,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<[egui::Pos2; 3]> {
    if sweep_deg <= 0.0 {
        return Vec::new();
    }
    let steps = (sweep_deg / PIE_SEGMENT_DEG).ceil().max(1.0) as usize;
    let step = sweep_deg / steps as f64;
    (0..steps)
        .map(|k| {
            let a0 = start_deg + step * k as f64;
            let a1 = a0 + step;
            [center, polar(center, radius, a0), polar(center, radius, a1)]
        })
        .collect()
}

fn slice_color(slice: &ChartSlice) -> egui::Color32 {
    let [r, g, b] = slice.category.color_rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// 파이 차트를 그린다. 라벨은 조각 바깥, 비율은 조각 안쪽.
fn pie_chart_ui(ui: &mut egui::Ui, slices: &[ChartSlice], tr: &i18n::Translator) {
    let size = egui::vec2(PIE_RADIUS * 2.0 + 220.0, PIE_RADIUS * 2.0 + 60.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let center = response.rect.center();
    let text_color = ui.visuals().text_color();
    for slice in slices {
        let fill = slice_color(slice);
        for tri in wedge_triangles(center, PIE_RADIUS, slice.start_angle_deg, slice.sweep_deg) {
            painter.add(egui::Shape::convex_polygon(
                tri.to_vec(),
                fill,
                egui::Stroke::new(0.5, fill),
            ));
        }
        let mid = slice.start_angle_deg + slice.sweep_deg / 2.0;
        painter.text(
            polar(center, PIE_RADIUS * 0.6, mid),
            egui::Align2::CENTER_CENTER,
            slice.percent_label(),
            egui::FontId::proportional(13.0),
            egui::Color32::BLACK,
        );
        let outer = polar(center, PIE_RADIUS * 1.12, mid);
        let align = if outer.x >= center.x {
            egui::Align2::LEFT_CENTER
        } else {
            egui::Align2::RIGHT_CENTER
        };
        painter.text(
            outer,
            align,
            tr.t(slice.category.i18n_key()),
            egui::FontId::proportional(13.0),
            text_color,
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Home,
    About,
    Calculator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    Yes,
    No,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    save_status: Option<String>,
    font_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    ui_scale: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    show_formula_modal: bool,
    // 계산기 입력 스냅샷
    form: FormState,
    feedback: Option<Feedback>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language(&config.language, None);
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        tracing::info!(lang = %lang_code, "gui started");
        Self {
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            ui_scale: config.ui_scale.clamp(0.8, 1.6),
            config,
            tr,
            save_status: None,
            font_status: None,
            tab: Tab::Home,
            show_settings_modal: false,
            show_help_modal: false,
            show_formula_modal: false,
            form: FormState::default(),
            feedback: Some(Feedback::Yes),
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    fn edit(&mut self, edit: FormEdit) {
        self.form = self.form.apply(edit);
    }

    /// 사이드 메뉴를 제공한다. 계산기 탭에서는 입력 폼도 함께 표시한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.txt("gui.nav.heading", "🌿 Navigation"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Home, self.txt("gui.tab.home", "Home")),
            (Tab::About, self.txt("gui.tab.about", "About Us")),
            (Tab::Calculator, self.txt("gui.tab.calculator", "Calculator")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(self.txt("gui.nav.switch_tip", "Switch page"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
        if self.tab == Tab::Calculator {
            ui.separator();
            self.ui_inputs(ui);
        }
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.input.heading", "🌱 Enter Your Daily Activities"));
        ui.add_space(6.0);
        let input = *self.form.input();

        let mut electricity = input.electricity_kwh_per_month;
        ui.label(self.txt(
            "gui.input.electricity",
            "Electricity Consumption (kWh per month)",
        ));
        if ui
            .add(
                egui::DragValue::new(&mut electricity)
                    .speed(INPUT_STEP)
                    .clamp_range(0.0..=f64::MAX)
                    .fixed_decimals(2),
            )
            .changed()
        {
            self.edit(FormEdit::Electricity(electricity));
        }

        let mut car = input.car_km_per_day;
        ui.label(self.txt("gui.input.car_km", "Distance Traveled by Car (km per day)"));
        if ui
            .add(
                egui::DragValue::new(&mut car)
                    .speed(INPUT_STEP)
                    .clamp_range(0.0..=f64::MAX)
                    .fixed_decimals(2),
            )
            .changed()
        {
            self.edit(FormEdit::CarDistance(car));
        }

        let mut transit = input.transit_km_per_day;
        ui.label(self.txt("gui.input.transit_km", "Public Transport Usage (km per day)"));
        if ui
            .add(
                egui::DragValue::new(&mut transit)
                    .speed(INPUT_STEP)
                    .clamp_range(0.0..=f64::MAX)
                    .fixed_decimals(2),
            )
            .changed()
        {
            self.edit(FormEdit::TransitDistance(transit));
        }

        let mut meat = input.meat_frequency;
        ui.label(self.txt("gui.input.meat", "How often do you eat meat?"));
        egui::ComboBox::from_id_source("meat_frequency")
            .selected_text(self.tr.t(meat.i18n_key()))
            .show_ui(ui, |ui| {
                for freq in MeatFrequency::ALL {
                    ui.selectable_value(&mut meat, freq, self.tr.t(freq.i18n_key()));
                }
            });
        if meat != input.meat_frequency {
            self.edit(FormEdit::MeatFrequency(meat));
        }

        ui.add_space(8.0);
        if ui
            .button(self.txt("gui.input.reset", "🔄 Reset"))
            .on_hover_text(self.txt(
                "gui.input.reset_tip",
                "Reset all inputs to 0 and meat frequency to Daily",
            ))
            .clicked()
        {
            self.edit(FormEdit::Reset);
        }
    }

    fn ui_home(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt(
            "gui.home.title",
            "🌍 Welcome to the Carbon Footprint Calculator",
        ));
        ui.add_space(8.0);
        ui.label(self.tr.t(keys::HOME_BODY));
        ui.add_space(8.0);
        ui.label(self.tr.t(keys::HOME_FEATURES));
    }

    fn ui_about(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.about.title", "ℹ️ About Us"));
        ui.add_space(8.0);
        ui.label(self.tr.t(keys::ABOUT_BODY));
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let report = self.form.report();
        ui.heading(self.txt("gui.calc.title", "📊 Carbon Footprint Calculator"));
        ui.add_space(8.0);
        self.ui_results(ui, &report);
        ui.add_space(12.0);

        ui.heading(self.tr.t(keys::RESULT_BREAKDOWN));
        if report.slices.is_empty() {
            ui.label(egui::RichText::new(self.tr.t(keys::RESULT_NO_DATA)).italics());
        } else {
            pie_chart_ui(ui, &report.slices, &self.tr);
        }
        ui.add_space(12.0);

        ui.heading(self.tr.t(keys::TIPS_HEADING));
        for tip in &report.tips {
            ui.label(format!("✅ {}", self.tr.t(tip.i18n_key())));
        }
        ui.add_space(6.0);
        egui::Frame::group(ui.style())
            .fill(egui::Color32::from_rgb(0xd4, 0xed, 0xda))
            .show(ui, |ui| {
                ui.colored_label(
                    egui::Color32::from_rgb(0x15, 0x57, 0x24),
                    self.tr.t(keys::TIPS_FOOTER),
                );
            });
        ui.add_space(8.0);

        egui::CollapsingHeader::new(self.tr.t(keys::DID_YOU_KNOW_HEADING))
            .default_open(false)
            .show(ui, |ui| {
                ui.label(self.tr.t(keys::DID_YOU_KNOW_BODY));
            });

        ui.separator();
        self.ui_feedback(ui);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.txt(
                    "gui.caption.text",
                    "🌍 Created for a cleaner tomorrow | Learn more:",
                ))
                .small(),
            );
            ui.hyperlink_to(self.txt("gui.caption.link", "UN Climate Action"), CLIMATE_ACTION_URL);
        });
    }

    fn ui_results(&self, ui: &mut egui::Ui, report: &FootprintReport) {
        ui.heading(self.txt(
            "gui.result.heading",
            "🌍 Your Estimated Daily Carbon Footprint",
        ));
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.tr.t(keys::RESULT_TOTAL)).strong());
            ui.label(
                egui::RichText::new(format!(
                    "{:.2} {}",
                    report.total,
                    self.tr.t(keys::RESULT_PER_DAY)
                ))
                .monospace(),
            );
        });
        let label = i18n::fill_template(
            &self.tr.t(keys::RESULT_PROGRESS),
            &[("percent", report.progress_percent().to_string())],
        );
        ui.add(egui::ProgressBar::new(report.progress as f32).text(label))
            .on_hover_text(format!("{:.1} / {DAILY_TARGET_KG:.1} kg", report.total));

        egui::Grid::new("breakdown_grid")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for category in footprint::Category::ALL {
                    ui.label(self.tr.t(category.i18n_key()));
                    ui.label(format!("{:.2} kg", category.value_in(&report.breakdown)));
                    ui.end_row();
                }
            });
    }

    fn ui_feedback(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.txt("gui.feedback.heading", "📝 Was this calculator helpful?"));
        let label = self.txt("gui.feedback.label", "Your feedback:");
        let yes = self.txt("gui.feedback.yes", "👍 Yes");
        let no = self.txt("gui.feedback.no", "👎 No");
        ui.horizontal(|ui| {
            ui.label(label);
            ui.radio_value(&mut self.feedback, Some(Feedback::Yes), yes);
            ui.radio_value(&mut self.feedback, Some(Feedback::No), no);
        });
        if self.feedback.is_some() {
            ui.label(self.txt("gui.feedback.thanks", "Thank you for your feedback!"));
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new(self.txt("gui.settings.title", "Program Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.txt("gui.settings.ui_scale", "UI scale"));
                let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                if ui.add(scale_slider).changed() {
                    ctx.set_pixels_per_point(self.ui_scale);
                }
                ui.separator();
                ui.label(self.txt("gui.settings.alpha", "Window transparency"));
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                ui.separator();
                ui.label(self.txt("gui.settings.font", "User font (.ttf/.ttc)"));
                ui.horizontal(|ui| {
                    let current = self
                        .config
                        .font_path
                        .clone()
                        .unwrap_or_else(|| self.txt("gui.settings.font_none", "(none)"));
                    ui.label(current);
                    if ui.button(self.txt("gui.settings.font_pick", "Choose…")).clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            let path = path.display().to_string();
                            self.font_status = Some(match load_custom_font(ctx, &path) {
                                Ok(()) => {
                                    self.config.font_path = Some(path);
                                    self.txt("gui.settings.font_loaded", "Font applied.")
                                }
                                Err(e) => e,
                            });
                        }
                    }
                });
                if let Some(msg) = &self.font_status {
                    ui.label(msg);
                }

                ui.separator();
                ui.label(self.txt("gui.settings.lang", "Language"));
                let auto_label = self.txt("gui.settings.lang_auto", "System");
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), auto_label);
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                if ui.button(self.txt("gui.settings.save", "Save settings")).clicked() {
                    self.save_settings();
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    /// 설정값을 config에 반영하고 번역기를 즉시 교체한다.
    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        self.config.ui_scale = self.ui_scale;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.save_status = Some(match self.config.save() {
            Ok(()) => self.txt("gui.settings.saved", "Saved."),
            Err(e) => {
                tracing::error!(error = %e, "settings save failed");
                format!("{}: {e}", self.txt("gui.settings.save_error", "Save error"))
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.txt("gui.nav.app_title", "Carbon Footprint Calculator"));
                ui.separator();
                if ui
                    .button(self.txt("gui.formula.button", "Formula reference"))
                    .clicked()
                {
                    self.show_formula_modal = true;
                }
                if ui.button(self.txt("gui.settings.button", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.txt("gui.help.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_help_modal {
            let mut open = self.show_help_modal;
            egui::Window::new(self.txt("gui.help.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(self.txt(
                        "gui.help.app",
                        "Offline estimator for daily household CO₂ emissions",
                    ));
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(self.txt(
                        "gui.help.inputs",
                        "Inputs cannot go below 0. Reset restores 0 / 0 / 0 / Daily.",
                    ));
                    ui.label(self.txt(
                        "gui.help.storage",
                        "Inputs are never saved; only program settings are written to config.toml.",
                    ));
                });
            self.show_help_modal = open;
        }

        if self.show_formula_modal {
            let mut open = self.show_formula_modal;
            egui::Window::new(self.txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(self.txt(
                        "gui.formula.electricity",
                        "Electricity: kWh/month × 0.92 kg/kWh ÷ 30 days",
                    ));
                    ui.label(self.txt("gui.formula.car", "Car: km/day × 0.21 kg/km"));
                    ui.label(self.txt("gui.formula.transit", "Public transport: km/day × 0.10 kg/km"));
                    ui.label(self.txt(
                        "gui.formula.meat",
                        "Meat: Daily 3.3 / Few times a week 2.0 / Rarely 1.0 / Never 0.1 kg/day",
                    ));
                    ui.separator();
                    ui.label(self.txt(
                        "gui.formula.progress",
                        "Progress = min(total ÷ 5.0 kg, 1)",
                    ));
                    ui.label(self.txt(
                        "gui.formula.tips",
                        "Tips appear when a category exceeds 1 kg/day (public transport excluded).",
                    ));
                });
            self.show_formula_modal = open;
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(180.0)
            .default_width(260.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Home => self.ui_home(ui),
                    Tab::About => self.ui_about(ui),
                    Tab::Calculator => self.ui_calculator(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_app() -> GuiApp {
        GuiApp::new(config::Config {
            language: "en-us".into(),
            ..config::Config::default()
        })
    }

    #[test]
    fn starts_on_home_with_default_form() {
        let app = english_app();
        assert_eq!(app.tab, Tab::Home);
        assert_eq!(app.form, FormState::default());
        assert_eq!(app.feedback, Some(Feedback::Yes));
    }

    #[test]
    fn gui_args_accept_language_and_log_filter() {
        let args = GuiArgs::try_parse_from(["gui", "-L", "ko", "--log=debug"]).expect("args");
        assert_eq!(args.lang.as_deref(), Some("ko"));
        assert_eq!(args.log.as_deref(), Some("debug"));
        let args = GuiArgs::try_parse_from(["gui"]).expect("args");
        assert!(args.lang.is_none() && args.log.is_none());
    }

    #[test]
    fn settings_button_and_window_use_separate_keys() {
        let app = english_app();
        assert_eq!(app.txt("gui.settings.button", "Settings"), "Settings");
        assert_eq!(
            app.txt("gui.settings.title", "Program Settings"),
            "Program Settings"
        );
    }

    #[test]
    fn reset_edit_restores_defaults() {
        let mut app = english_app();
        app.edit(FormEdit::Electricity(300.0));
        app.edit(FormEdit::CarDistance(10.0));
        app.edit(FormEdit::MeatFrequency(MeatFrequency::Never));
        app.edit(FormEdit::Reset);
        let input = app.form.input();
        assert_eq!(input.electricity_kwh_per_month, 0.0);
        assert_eq!(input.car_km_per_day, 0.0);
        assert_eq!(input.transit_km_per_day, 0.0);
        assert_eq!(input.meat_frequency, MeatFrequency::Daily);
    }

    #[test]
    fn wedge_is_split_into_small_triangles() {
        let center = egui::pos2(0.0, 0.0);
        let tris = wedge_triangles(center, 10.0, 90.0, 180.0);
        assert_eq!(tris.len(), 36);
        // 90°는 화면 위쪽(음의 y)
        assert!((tris[0][1].y + 10.0).abs() < 1e-4);
        assert!(wedge_triangles(center, 10.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn polar_follows_counter_clockwise_screen_axes() {
        let p = polar(egui::pos2(50.0, 50.0), 10.0, 180.0);
        assert!((p.x - 40.0).abs() < 1e-4);
        assert!((p.y - 50.0).abs() < 1e-4);
    }
}
