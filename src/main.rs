use chef_menu::utils::{logger, validation::Validate};
use chef_menu::{ChefSession, CliConfig, PrintLauncher, Repl, RestaurantConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting chef-menu session");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入餐廳資訊
    let restaurant = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading restaurant details from: {}", path);
            match RestaurantConfig::from_file(path).and_then(|r| r.validate().map(|_| r)) {
                Ok(restaurant) => restaurant,
                Err(e) => {
                    tracing::error!(
                        "❌ Failed to load '{}': {} (Category: {:?})",
                        path,
                        e,
                        e.category()
                    );
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => RestaurantConfig::builtin(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = ChefSession::new(restaurant, PrintLauncher::new(std::io::stdout()));
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), session, config.yes)?;

    repl.run()?;
    Ok(())
}
