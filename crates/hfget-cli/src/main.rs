//! `hfget` entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use console::style;
use hfget_cli::utils::input::LinePrompter;
use hfget_cli::{Cli, CliError, Wizard, WizardOutcome, bootstrap, handlers, presentation};
use hfget_core::{CoreError, SettingsStore};
use hfget_download::{INTERRUPT_GRACE, InterruptAction, Interrupts, print_interrupt_notice};
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_goodbye() {
    println!("{}", style("\n\nGoodbye! 👋").yellow());
}

/// Ctrl+C for the rest of the process: outside a download it quits like a
/// closed prompt; during one it exits once the batch is cleaned up.
fn install_interrupt_listener(interrupts: &Interrupts) -> JoinHandle<()> {
    interrupts.listen(INTERRUPT_GRACE, |action| match action {
        InterruptAction::Idle => {
            print_goodbye();
            std::process::exit(0);
        }
        InterruptAction::ForcedCleanup(cleanup) => {
            print_interrupt_notice(&cleanup);
            std::process::exit(0);
        }
        // The download step stopped by itself and ends the wizard.
        InterruptAction::Handled => {}
    })
}

async fn run_wizard(store: SettingsStore) -> Result<(), CliError> {
    let ctx = bootstrap(store)?;
    presentation::print_banner(ctx.store.path());
    let _listener = install_interrupt_listener(ctx.downloader.interrupts());

    let mut prompter = LinePrompter::stdio();
    let outcome = Wizard::new(&ctx.catalog, &ctx.downloader, &ctx.settings, &mut prompter)
        .run()
        .await?;

    if outcome == WizardOutcome::Finished {
        println!("{}", style("\n✨ Done!\n").green());
    }
    Ok(())
}

fn report(err: &CliError, config_path: Option<&Path>) {
    match (err, config_path) {
        (CliError::Core(CoreError::UserCancelled), _) => print_goodbye(),
        (CliError::Core(CoreError::AuthMissing), Some(path)) => presentation::print_missing_token(path),
        (other, _) => eprintln!("{}", style(format!("✗ {other}")).red()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let command = match Cli::try_parse() {
        Ok(cli) => cli.command,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            println!("{}", presentation::usage());
            return ExitCode::SUCCESS;
        }
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            tracing::debug!(error = %e, "Unrecognised arguments, starting the wizard");
            None
        }
    };

    let store = SettingsStore::open_default();
    let config_path = store.as_ref().ok().map(|s| s.path().to_path_buf());

    let result = match (command, store) {
        (Some(command), store) => handlers::execute(command, store),
        (None, Ok(store)) => run_wizard(store).await,
        (None, Err(e)) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, config_path.as_deref());
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}
