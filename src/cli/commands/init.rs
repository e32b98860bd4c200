use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::display_path;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file with defaults; the global --backend-url
///    flag, when given, is written into the new file
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.backend_url.clone())?;

    let cfg = Config::load();

    println!("⚙️  Initializing tripsheet…");
    println!("📄 Config file : {}", display_path(&Config::config_file()));
    println!("🌐 Backend URL : {}", cfg.backend_url);

    Ok(())
}
