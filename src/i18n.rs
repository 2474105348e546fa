use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_HOME: &str = "main_menu.home";
    pub const MAIN_MENU_ABOUT: &str = "main_menu.about";
    pub const MAIN_MENU_CALCULATOR: &str = "main_menu.calculator";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const HOME_HEADING: &str = "home.heading";
    pub const HOME_BODY: &str = "home.body";
    pub const HOME_FEATURES: &str = "home.features";

    pub const ABOUT_HEADING: &str = "about.heading";
    pub const ABOUT_BODY: &str = "about.body";

    pub const CALC_HEADING: &str = "calculator.heading";
    pub const CALC_OPTIONS: &str = "calculator.options";
    pub const CALC_CURRENT_INPUTS: &str = "calculator.current_inputs";
    pub const CALC_RESET_DONE: &str = "calculator.reset_done";
    pub const PROMPT_ELECTRICITY: &str = "prompt.electricity";
    pub const PROMPT_CAR_KM: &str = "prompt.car_km";
    pub const PROMPT_TRANSIT_KM: &str = "prompt.transit_km";
    pub const PROMPT_MEAT: &str = "prompt.meat";
    pub const MEAT_OPTIONS: &str = "calculator.meat_options";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_TOTAL: &str = "result.total";
    pub const RESULT_PER_DAY: &str = "result.per_day";
    pub const RESULT_PROGRESS: &str = "result.progress";
    pub const RESULT_BREAKDOWN: &str = "result.breakdown";
    pub const RESULT_NO_DATA: &str = "result.no_data";
    pub const TIPS_HEADING: &str = "tips.heading";
    pub const TIPS_FOOTER: &str = "tips.footer";
    pub const DID_YOU_KNOW_HEADING: &str = "did_you_know.heading";
    pub const DID_YOU_KNOW_BODY: &str = "did_you_know.body";
    pub const CAPTION: &str = "general.caption";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NEGATIVE_CLAMPED: &str = "error.negative_clamped";
    pub const ERROR_INPUT_NEGATIVE: &str = "error.input_negative";
    pub const ERROR_INPUT_NOT_FINITE: &str = "error.input_not_finite";
    pub const ERROR_IO: &str = "error.io";
    pub const ERROR_CONFIG: &str = "error.config";

    pub const FIELD_ELECTRICITY: &str = "field.electricity";
    pub const FIELD_CAR_DISTANCE: &str = "field.car_distance";
    pub const FIELD_TRANSIT_DISTANCE: &str = "field.transit_distance";

    pub const CATEGORY_ELECTRICITY: &str = "category.electricity";
    pub const CATEGORY_CAR: &str = "category.car";
    pub const CATEGORY_PUBLIC_TRANSPORT: &str = "category.public_transport";
    pub const CATEGORY_MEAT: &str = "category.meat";

    pub const MEAT_DAILY: &str = "meat.daily";
    pub const MEAT_FEW_TIMES_WEEK: &str = "meat.few_times_week";
    pub const MEAT_RARELY: &str = "meat.rarely";
    pub const MEAT_NEVER: &str = "meat.never";

    pub const TIP_EFFICIENT_APPLIANCES: &str = "tip.efficient_appliances";
    pub const TIP_UNPLUG_DEVICES: &str = "tip.unplug_devices";
    pub const TIP_SHARED_TRANSPORT: &str = "tip.shared_transport";
    pub const TIP_ELECTRIC_VEHICLES: &str = "tip.electric_vehicles";
    pub const TIP_PLANT_BASED_MEALS: &str = "tip.plant_based_meals";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        tracing::debug!(
            lang = lang_code,
            overrides = overrides.as_ref().map_or(0, HashMap::len),
            "translator created"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며, 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let s = match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        s.to_string()
    }
}

/// `{name}` 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 중첩 키.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., ko-kr)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., ko)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// TOML 문자열을 점 표기 키의 플랫 맵으로 펼친다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함). GUI 문자열용.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 🌍 탄소 발자국 계산기 ===",
        MAIN_MENU_HOME => "1) 홈",
        MAIN_MENU_ABOUT => "2) 소개",
        MAIN_MENU_CALCULATOR => "3) 계산기",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        HOME_HEADING => "\n-- 🌍 탄소 발자국 계산기에 오신 것을 환영합니다 --",
        HOME_BODY => {
            "왜 탄소 발자국을 측정할까요?\n우리가 하는 모든 활동은 탄소를 배출하고 기후 변화에 영향을 줍니다.\n이 도구는 하루 탄소 발자국을 추정하고 줄이는 팁을 제공합니다."
        }
        HOME_FEATURES => {
            "💡 기능:\n- 📊 대화형 탄소 계산기\n- 🏡 맞춤형 절감 팁\n- 📌 쉬운 사용법\n- 🌎 기후 변화 알아보기"
        }
        ABOUT_HEADING => "\n-- ℹ️ 소개 --",
        ABOUT_BODY => {
            "목표: 탄소 발자국에 대한 인식을 높이고 지속 가능한 생활을 장려합니다. 🌱\n\n작동 방식:\n- 전력, 교통, 식습관에서 나오는 CO₂ 배출량을 계산합니다.\n- 배출을 줄이기 위한 맞춤형 팁을 제공합니다.\n- 결과를 차트로 보여줍니다.\n\n왜 중요할까요?\n기후 변화는 오늘날 가장 큰 과제 중 하나입니다. 고효율 가전 사용이나\n육류 섭취 줄이기 같은 작은 습관이 큰 차이를 만듭니다! 🌎"
        }
        CALC_HEADING => "\n-- 📊 탄소 발자국 계산기 --",
        CALC_OPTIONS => "1) 값 입력  2) 🔄 초기화  3) 결과 보기  0) 돌아가기",
        CALC_CURRENT_INPUTS => "현재 입력:",
        CALC_RESET_DONE => "입력값을 기본값으로 되돌렸습니다.",
        PROMPT_ELECTRICITY => "전력 사용량 (kWh/월): ",
        PROMPT_CAR_KM => "승용차 이동거리 (km/일): ",
        PROMPT_TRANSIT_KM => "대중교통 이동거리 (km/일): ",
        PROMPT_MEAT => "육류 섭취 빈도: ",
        MEAT_OPTIONS => "1) 매일  2) 주 몇 회  3) 드물게  4) 먹지 않음",
        RESULT_HEADING => "\n-- 🌍 예상 일일 탄소 발자국 --",
        RESULT_TOTAL => "총 배출량:",
        RESULT_PER_DAY => "kg CO₂/일",
        RESULT_PROGRESS => "권장 일일 한도(5.0 kg)의 {percent}%",
        RESULT_BREAKDOWN => "📊 배출 내역",
        RESULT_NO_DATA => "표시할 배출 데이터가 없습니다. 값을 입력하세요.",
        TIPS_HEADING => "♻️ 탄소 발자국을 줄이려면?",
        TIPS_FOOTER => "작은 변화가 큰 영향을 만듭니다! 🌱",
        DID_YOU_KNOW_HEADING => "💡 알고 계셨나요?",
        DID_YOU_KNOW_BODY => {
            "- 소고기 1 kg 생산 시 약 27 kg의 CO₂가 배출됩니다.\n- 이코노미석은 비즈니스석보다 승객당 CO₂ 배출이 적습니다.\n- 5분 샤워에 최대 75리터의 온수가 쓰일 수 있습니다!"
        }
        CAPTION => "🌍 더 깨끗한 내일을 위해 | 더 알아보기: https://www.un.org/en/climatechange",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 시스템  2) English  3) 한국어",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NEGATIVE_CLAMPED => "음수는 입력할 수 없어 0으로 설정했습니다.",
        ERROR_INPUT_NEGATIVE => "{field} 값은 0 이상이어야 합니다: {value}",
        ERROR_INPUT_NOT_FINITE => "{field} 값이 유한한 숫자가 아닙니다.",
        ERROR_IO => "입출력 오류: {detail}",
        ERROR_CONFIG => "설정 오류: {detail}",
        FIELD_ELECTRICITY => "전력 사용량",
        FIELD_CAR_DISTANCE => "승용차 이동거리",
        FIELD_TRANSIT_DISTANCE => "대중교통 이동거리",
        CATEGORY_ELECTRICITY => "전력",
        CATEGORY_CAR => "승용차",
        CATEGORY_PUBLIC_TRANSPORT => "대중교통",
        CATEGORY_MEAT => "육류 섭취",
        MEAT_DAILY => "매일",
        MEAT_FEW_TIMES_WEEK => "주 몇 회",
        MEAT_RARELY => "드물게",
        MEAT_NEVER => "먹지 않음",
        TIP_EFFICIENT_APPLIANCES => "고효율 가전제품과 LED 조명을 사용하세요.",
        TIP_UNPLUG_DEVICES => "사용하지 않는 기기는 플러그를 뽑으세요.",
        TIP_SHARED_TRANSPORT => "카풀, 자전거, 대중교통을 더 자주 이용해 보세요.",
        TIP_ELECTRIC_VEHICLES => "가능하면 전기차나 하이브리드 차량을 이용하세요.",
        TIP_PLANT_BASED_MEALS => "육류 섭취를 줄이고 식물성 식단으로 바꿔 보세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== 🌍 Carbon Footprint Calculator ===",
        MAIN_MENU_HOME => "1) Home",
        MAIN_MENU_ABOUT => "2) About Us",
        MAIN_MENU_CALCULATOR => "3) Calculator",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        HOME_HEADING => "\n-- 🌍 Welcome to the Carbon Footprint Calculator --",
        HOME_BODY => {
            "Why Measure Your Carbon Footprint?\nEvery activity we do contributes to carbon emissions, impacting climate change.\nThis tool helps you estimate your daily carbon footprint and provides tips to reduce it."
        }
        HOME_FEATURES => {
            "💡 Features of this Tool:\n- 📊 Interactive Carbon Calculator\n- 🏡 Personalized Reduction Tips\n- 📌 User-Friendly Interface\n- 🌎 Learn About Climate Change"
        }
        ABOUT_HEADING => "\n-- ℹ️ About Us --",
        ABOUT_BODY => {
            "Mission: Our goal is to spread awareness about carbon footprints and\nencourage people to adopt sustainable practices for a greener planet. 🌱\n\nHow It Works:\n- This tool calculates CO₂ emissions from electricity, transportation, and diet.\n- It gives you personalized tips to reduce your footprint.\n- We provide data visualizations to make the information easier to understand.\n\nWhy It Matters?\nClimate change is one of the biggest challenges today. Small daily actions,\nlike using energy-efficient appliances or reducing meat consumption, can make\na big difference! 🌎"
        }
        CALC_HEADING => "\n-- 📊 Carbon Footprint Calculator --",
        CALC_OPTIONS => "1) Enter values  2) 🔄 Reset  3) Show results  0) Back",
        CALC_CURRENT_INPUTS => "Current inputs:",
        CALC_RESET_DONE => "Inputs reset to defaults.",
        PROMPT_ELECTRICITY => "Electricity Consumption (kWh per month): ",
        PROMPT_CAR_KM => "Distance Traveled by Car (km per day): ",
        PROMPT_TRANSIT_KM => "Public Transport Usage (km per day): ",
        PROMPT_MEAT => "How often do you eat meat? ",
        MEAT_OPTIONS => "1) Daily  2) Few times a week  3) Rarely  4) Never",
        RESULT_HEADING => "\n-- 🌍 Your Estimated Daily Carbon Footprint --",
        RESULT_TOTAL => "Total Emissions:",
        RESULT_PER_DAY => "kg CO₂ per day",
        RESULT_PROGRESS => "{percent}% of recommended daily limit (5.0 kg)",
        RESULT_BREAKDOWN => "📊 Emissions Breakdown",
        RESULT_NO_DATA => "No emissions data to display. Please enter some values.",
        TIPS_HEADING => "♻️ How to Reduce Your Carbon Footprint?",
        TIPS_FOOTER => "Small changes can create a big impact! 🌱",
        DID_YOU_KNOW_HEADING => "💡 Did You Know?",
        DID_YOU_KNOW_BODY => {
            "- Producing 1 kg of beef emits around 27 kg of CO₂.\n- Flying economy emits less CO₂ per passenger than business class.\n- A 5-minute shower can use up to 75 liters of hot water!"
        }
        CAPTION => {
            "🌍 Created for a cleaner tomorrow | Learn more: https://www.un.org/en/climatechange"
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) System  2) English  3) 한국어",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NEGATIVE_CLAMPED => "Negative values are not allowed; set to 0.",
        ERROR_INPUT_NEGATIVE => "{field} must be 0 or greater: {value}",
        ERROR_INPUT_NOT_FINITE => "{field} must be a finite number.",
        ERROR_IO => "I/O error: {detail}",
        ERROR_CONFIG => "Configuration error: {detail}",
        FIELD_ELECTRICITY => "Electricity usage",
        FIELD_CAR_DISTANCE => "Car distance",
        FIELD_TRANSIT_DISTANCE => "Public transit distance",
        CATEGORY_ELECTRICITY => "Electricity",
        CATEGORY_CAR => "Car",
        CATEGORY_PUBLIC_TRANSPORT => "Public Transport",
        CATEGORY_MEAT => "Meat Consumption",
        MEAT_DAILY => "Daily",
        MEAT_FEW_TIMES_WEEK => "Few times a week",
        MEAT_RARELY => "Rarely",
        MEAT_NEVER => "Never",
        TIP_EFFICIENT_APPLIANCES => "Use energy-efficient appliances & LED lights.",
        TIP_UNPLUG_DEVICES => "Unplug devices when not in use.",
        TIP_SHARED_TRANSPORT => "Consider carpooling, biking, or using public transport more often.",
        TIP_ELECTRIC_VEHICLES => "Use electric or hybrid vehicles if possible.",
        TIP_PLANT_BASED_MEALS => "Reduce meat consumption and switch to plant-based meals.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_builtin_table() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t(keys::CATEGORY_CAR), "Car");
        assert_eq!(tr.t(keys::TIP_UNPLUG_DEVICES), "Unplug devices when not in use.");
    }

    #[test]
    fn unknown_code_falls_back_to_korean() {
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::CATEGORY_CAR), "승용차");
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("en", Some("ko-kr")), "en-us");
        assert_eq!(resolve_language("auto", Some("ko")), "ko-kr");
    }

    #[test]
    fn nested_pack_is_flattened() {
        let map = parse_toml_to_map("[gui.nav]\nheading = \"메뉴\"\n").unwrap();
        assert_eq!(map.get("gui.nav.heading").map(String::as_str), Some("메뉴"));
    }

    #[test]
    fn builtin_korean_pack_parses() {
        let map = built_in_pack("ko-kr").unwrap();
        assert!(map.contains_key("gui.tab.calculator"));
        assert_eq!(map.get("gui.settings.button").map(String::as_str), Some("설정"));
        assert_ne!(map.get("gui.settings.button"), map.get("gui.settings.title"));
    }

    #[test]
    fn template_placeholders_are_replaced() {
        let tr = Translator::new("en");
        let line = fill_template(&tr.t(keys::RESULT_PROGRESS), &[("percent", "42".into())]);
        assert_eq!(line, "42% of recommended daily limit (5.0 kg)");
    }
}
