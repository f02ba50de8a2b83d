use anyhow::Result;
use gemini_manager::orchestrator::Session;
use gemini_manager::utils::logging;
use gemini_manager::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 动作: save（默认）或 dashboard
    let action = std::env::args().nth(1).unwrap_or_else(|| "save".to_string());
    logging::log_startup(&action);

    let session = Session::initialize(config).await?;

    match action.as_str() {
        "dashboard" => session.open_dashboard().await?,
        _ => session.save_all().await?,
    }

    Ok(())
}
