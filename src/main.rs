use clap::Parser;
use color_eyre::eyre::WrapErr;
use dirhist::{
    cli::Cli,
    config::Config,
    controller::NavigationController,
    navigator::{Navigator, ProcessNavigator, SystemClipboard},
    shell::Shell,
};
use std::io::IsTerminal;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    let mut config = Config::load(&args.config);
    if let Some(log_file) = args.log_file.as_ref().or(config.log_file.as_ref()) {
        dirhist::logging::init(log_file)?;
    }
    config.color &= std::io::stdout().is_terminal();

    let mut controller = NavigationController::new(ProcessNavigator::new(), SystemClipboard::new());
    if let Some(directory) = &args.directory {
        controller
            .navigator_mut()
            .attempt_change(directory, false)
            .wrap_err_with(|| format!("cannot start in {}", directory))?;
    }

    let mut shell = Shell::new(controller, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match args.exec {
        Some(line) => {
            shell.handle_line(&line, &mut stdin.lock(), &mut stdout.lock())?;
        }
        None => shell.run(stdin.lock(), stdout.lock())?,
    }

    Ok(())
}
