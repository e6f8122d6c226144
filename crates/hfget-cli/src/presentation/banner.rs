//! Banner, usage text and the missing-token hint.

use std::path::Path;

use console::style;
use hfget_core::TOKEN_ENV;

const LOGO: &str = r"
  _      __            _
 | |__  / _| __ _  ___| |_
 | '_ \| |_ / _` |/ _ \ __|
 | | | |  _| (_| |  __/ |_
 |_| |_|_|  \__, |\___|\__|
            |___/
  ";

pub const TITLE: &str = "🤗 HuggingFace Model Downloader";

/// Logo, title and settings location, printed when the wizard starts.
pub fn print_banner(config_path: &Path) {
    println!("{}", style(LOGO).yellow());
    println!("{}", style(TITLE).cyan().bold());
    println!("{}", style(format!("Config: {}", config_path.display())).dim());
}

/// Help text shown for `--help`/`-h`.
pub fn usage() -> String {
    format!(
        "{logo}
{title}

{usage}
  hfget [COMMAND]

{commands}
  (none)         Run interactive downloader
  init           Create a new config file
  config         Show config location and settings
  --help, -h     Show this help message
  --version, -v  Show version number

{configuration}
  Config file: ~/.config/hfget/config.json

{examples}
  hfget              Start interactive download
  hfget init         Initialize config file
  hfget config       View current configuration
",
        logo = style(LOGO).yellow(),
        title = style(TITLE).cyan().bold(),
        usage = style("USAGE:").bold(),
        commands = style("COMMANDS:").bold(),
        configuration = style("CONFIGURATION:").bold(),
        examples = style("EXAMPLES:").bold(),
    )
}

/// Explain how to provide a token. Printed to stderr before exiting.
pub fn print_missing_token(config_path: &Path) {
    eprintln!("{}", style(format!("❌ {TOKEN_ENV} not set.")).red());
    eprintln!("{}", style("   Option 1: Set environment variable").dim());
    eprintln!("      export {TOKEN_ENV}=hf_xxxxxxxxxxxxx");
    eprintln!("{}", style("   Option 2: Set in config file").dim());
    eprintln!(
        "      Run 'hfget init' to create config at {}",
        config_path.display()
    );
}
