use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, ConfigError};
use crate::footprint::{FootprintInput, FootprintReport, InputError, MeatFrequency};
use crate::form::{FormEdit, FormState};
use crate::i18n::{fill_template, keys, Translator};

/// 텍스트 막대 차트 최대 폭(문자 수).
const BAR_WIDTH: usize = 30;
/// 진행률 막대 폭(문자 수).
const PROGRESS_WIDTH: usize = 20;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Home,
    About,
    Calculator,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_HOME));
    println!("{}", tr.t(keys::MAIN_MENU_ABOUT));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATOR));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Home),
            "2" => return Ok(MenuChoice::About),
            "3" => return Ok(MenuChoice::Calculator),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 홈 화면 문구를 출력한다.
pub fn show_home(tr: &Translator) {
    println!("{}", tr.t(keys::HOME_HEADING));
    println!("{}", tr.t(keys::HOME_BODY));
    println!();
    println!("{}", tr.t(keys::HOME_FEATURES));
}

/// 소개 화면 문구를 출력한다.
pub fn show_about(tr: &Translator) {
    println!("{}", tr.t(keys::ABOUT_HEADING));
    println!("{}", tr.t(keys::ABOUT_BODY));
}

/// 계산기 메뉴를 처리하고 마지막 폼 상태를 돌려준다.
pub fn handle_calculator(tr: &Translator, mut form: FormState) -> Result<FormState, AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    loop {
        println!("{}", render_inputs(tr, form.input()));
        println!("{}", tr.t(keys::CALC_OPTIONS));
        let sel = read_line(&tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => {
                let electricity = read_non_negative(tr, &tr.t(keys::PROMPT_ELECTRICITY))?;
                form = form.apply(FormEdit::Electricity(electricity));
                let car = read_non_negative(tr, &tr.t(keys::PROMPT_CAR_KM))?;
                form = form.apply(FormEdit::CarDistance(car));
                let transit = read_non_negative(tr, &tr.t(keys::PROMPT_TRANSIT_KM))?;
                form = form.apply(FormEdit::TransitDistance(transit));
                let meat = read_meat_frequency(tr)?;
                form = form.apply(FormEdit::MeatFrequency(meat));
                print_report(tr, &form.report());
            }
            "2" => {
                form = form.apply(FormEdit::Reset);
                println!("{}", tr.t(keys::CALC_RESET_DONE));
            }
            "3" => print_report(tr, &form.report()),
            "0" | "" => return Ok(form),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(false);
    }
    let lang = match sel.trim() {
        "1" => "auto",
        "2" => "en-us",
        "3" => "ko-kr",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    let changed = cfg.language != lang;
    cfg.language = lang.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(changed)
}

/// 결과를 표준 출력에 표시한다.
pub fn print_report(tr: &Translator, report: &FootprintReport) {
    println!("{}", render_report(tr, report));
}

/// 현재 입력값 요약.
pub fn render_inputs(tr: &Translator, input: &FootprintInput) -> String {
    format!(
        "{}\n  {}{:.1}\n  {}{:.1}\n  {}{:.1}\n  {}{}",
        tr.t(keys::CALC_CURRENT_INPUTS),
        tr.t(keys::PROMPT_ELECTRICITY),
        input.electricity_kwh_per_month,
        tr.t(keys::PROMPT_CAR_KM),
        input.car_km_per_day,
        tr.t(keys::PROMPT_TRANSIT_KM),
        input.transit_km_per_day,
        tr.t(keys::PROMPT_MEAT),
        tr.t(input.meat_frequency.i18n_key()),
    )
}

/// 총량, 진행률, 내역 막대 차트, 팁을 담은 텍스트 보고서를 만든다.
pub fn render_report(tr: &Translator, report: &FootprintReport) -> String {
    let mut out = String::new();
    out.push_str(&tr.t(keys::RESULT_HEADING));
    out.push('\n');
    out.push_str(&format!(
        "{} {:.2} {}\n",
        tr.t(keys::RESULT_TOTAL),
        report.total,
        tr.t(keys::RESULT_PER_DAY)
    ));

    let filled = (report.progress * PROGRESS_WIDTH as f64).round() as usize;
    let progress_label = fill_template(
        &tr.t(keys::RESULT_PROGRESS),
        &[("percent", report.progress_percent().to_string())],
    );
    out.push_str(&format!(
        "[{}{}] {progress_label}\n",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    ));

    out.push('\n');
    out.push_str(&tr.t(keys::RESULT_BREAKDOWN));
    out.push('\n');
    if report.slices.is_empty() {
        out.push_str(&tr.t(keys::RESULT_NO_DATA));
        out.push('\n');
    }
    for slice in &report.slices {
        let bar_len = ((slice.share * BAR_WIDTH as f64).round() as usize).max(1);
        out.push_str(&format!(
            "  {:<18} {:>7.2} kg  {:<width$} {}\n",
            tr.t(slice.category.i18n_key()),
            slice.value,
            "█".repeat(bar_len),
            slice.percent_label(),
            width = BAR_WIDTH
        ));
    }

    out.push('\n');
    out.push_str(&tr.t(keys::TIPS_HEADING));
    out.push('\n');
    for tip in &report.tips {
        out.push_str(&format!("  ✅ {}\n", tr.t(tip.i18n_key())));
    }
    out.push_str(&tr.t(keys::TIPS_FOOTER));
    out.push('\n');
    out.push('\n');
    out.push_str(&tr.t(keys::DID_YOU_KNOW_HEADING));
    out.push('\n');
    out.push_str(&tr.t(keys::DID_YOU_KNOW_BODY));
    out.push('\n');
    out.push_str(&tr.t(keys::CAPTION));
    out
}

/// 오류를 현재 언어로 표시한다. 외부 라이브러리가 만든 상세 메시지는 그대로 붙인다.
pub fn render_error(tr: &Translator, err: &AppError) -> String {
    let message = match err {
        AppError::Input(InputError::Negative { field, value }) => fill_template(
            &tr.t(keys::ERROR_INPUT_NEGATIVE),
            &[("field", tr.t(field.i18n_key())), ("value", value.to_string())],
        ),
        AppError::Input(InputError::NotFinite { field }) => fill_template(
            &tr.t(keys::ERROR_INPUT_NOT_FINITE),
            &[("field", tr.t(field.i18n_key()))],
        ),
        AppError::Io(e) => fill_template(&tr.t(keys::ERROR_IO), &[("detail", e.to_string())]),
        AppError::Config(e) => {
            let detail = match e {
                ConfigError::Io(inner) => inner.to_string(),
                ConfigError::Serde(inner) => inner.to_string(),
                ConfigError::Serialize(inner) => inner.to_string(),
            };
            fill_template(&tr.t(keys::ERROR_CONFIG), &[("detail", detail)])
        }
    };
    format!("{}: {message}", tr.t(keys::ERROR_PREFIX))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 숫자를 읽는다. 음수는 0으로 고정하고 알린다. 빈 입력은 0.
fn read_non_negative(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(0.0);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                if v < 0.0 {
                    println!("{}", tr.t(keys::ERROR_NEGATIVE_CLAMPED));
                    return Ok(0.0);
                }
                return Ok(v);
            }
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_meat_frequency(tr: &Translator) -> Result<MeatFrequency, AppError> {
    println!("{}", tr.t(keys::MEAT_OPTIONS));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MEAT))?;
        if sel.trim().is_empty() {
            return Ok(MeatFrequency::default());
        }
        match sel.parse::<MeatFrequency>() {
            Ok(freq) => return Ok(freq),
            Err(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
