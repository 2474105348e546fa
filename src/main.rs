use carbon_footprint_calculator::{
    app::{self, AppError},
    config::{self, Config},
    footprint,
    footprint::{FootprintInput, InputError, MeatFrequency},
    i18n::{self, Translator},
    logging, ui_cli,
};
use clap::Parser;

/// 일일 탄소 발자국 계산기(CLI). 입력 플래그가 없으면 대화형 메뉴를 띄운다.
#[derive(Debug, Parser)]
#[command(name = "carbon_footprint_calculator_cli", version, about)]
struct Args {
    /// 월간 전력 사용량 [kWh/month]
    #[arg(long, value_name = "KWH", allow_hyphen_values = true)]
    electricity: Option<f64>,

    /// 승용차 이동거리 [km/day]
    #[arg(long, value_name = "KM", allow_hyphen_values = true)]
    car_km: Option<f64>,

    /// 대중교통 이동거리 [km/day]
    #[arg(long, value_name = "KM", allow_hyphen_values = true)]
    transit_km: Option<f64>,

    /// 육류 섭취 빈도 (daily, few-times-a-week, rarely, never)
    #[arg(long, value_name = "FREQ")]
    meat: Option<MeatFrequency>,

    /// 언어 (auto/en-us/ko-kr)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,

    /// tracing 필터 (예: info, carbon_footprint_calculator=debug)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn one_shot(&self) -> bool {
        self.electricity.is_some()
            || self.car_km.is_some()
            || self.transit_km.is_some()
            || self.meat.is_some()
    }

    /// 플래그 값으로 입력을 만든다. 빠진 값은 기본값(0, Daily)을 쓴다.
    fn input(&self) -> Result<FootprintInput, InputError> {
        FootprintInput::new(
            self.electricity.unwrap_or(0.0),
            self.car_km.unwrap_or(0.0),
            self.transit_km.unwrap_or(0.0),
            self.meat.unwrap_or_default(),
        )
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let args = Args::parse();
    let loaded = config::load_or_default();
    let (log_default, config_lang, pack_dir) = match &loaded {
        Ok(cfg) => (
            cfg.log_filter.clone(),
            Some(cfg.language.clone()),
            cfg.language_pack_dir.clone(),
        ),
        Err(_) => (Config::default().log_filter, None, None),
    };
    logging::init(args.log.as_deref(), &log_default);
    let lang = i18n::resolve_language(&args.lang, config_lang.as_deref());
    tracing::debug!(%lang, "language resolved");
    let mut tr = Translator::new_with_pack(&lang, pack_dir.as_deref());

    let result = loaded
        .map_err(AppError::from)
        .and_then(|mut cfg| try_run(&args, &mut cfg, &mut tr));
    if let Err(err) = result {
        tracing::error!(error = ?err, "cli failed");
        eprintln!("{}", ui_cli::render_error(&tr, &err));
        std::process::exit(1);
    }
}

fn try_run(args: &Args, cfg: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    if args.one_shot() {
        let report = footprint::assess(&args.input()?);
        ui_cli::print_report(tr, &report);
        return Ok(());
    }
    app::run(cfg, tr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn any_input_flag_selects_one_shot_report() {
        assert!(parse(&["cli", "--electricity", "300"]).one_shot());
        assert!(parse(&["cli", "--meat", "never"]).one_shot());
        assert!(!parse(&["cli", "--lang", "en"]).one_shot());
        assert!(!parse(&["cli"]).one_shot());
    }

    #[test]
    fn meat_flag_accepts_kebab_form() {
        let args = parse(&["cli", "--meat", "few-times-a-week"]);
        assert_eq!(args.meat, Some(MeatFrequency::FewTimesWeek));
        assert!(Args::try_parse_from(["cli", "--meat", "sometimes"]).is_err());
    }

    #[test]
    fn missing_flags_fall_back_to_defaults() {
        let input = parse(&["cli", "--car-km", "10"]).input().expect("valid");
        assert_eq!(input.car_km_per_day, 10.0);
        assert_eq!(input.electricity_kwh_per_month, 0.0);
        assert_eq!(input.meat_frequency, MeatFrequency::Daily);
    }

    #[test]
    fn negative_flag_is_rejected() {
        let args = parse(&["cli", "--car-km", "-2"]);
        assert_eq!(args.car_km, Some(-2.0));
        assert!(matches!(
            args.input(),
            Err(InputError::Negative { value, .. }) if value == -2.0
        ));
    }
}
