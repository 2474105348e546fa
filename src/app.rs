use crate::config::{Config, ConfigError};
use crate::footprint::InputError;
use crate::form::FormState;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 입력값 검증 오류
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    // 입력값은 세션 동안만 유지한다.
    let mut form = FormState::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Home => ui_cli::show_home(tr),
            MenuChoice::About => ui_cli::show_about(tr),
            MenuChoice::Calculator => form = ui_cli::handle_calculator(tr, form)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let resolved = i18n::resolve_language(&config.language, None);
                    *tr = Translator::new_with_pack(
                        &resolved,
                        config.language_pack_dir.as_deref(),
                    );
                    tracing::info!(language = %resolved, "language switched");
                }
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
