use clap::{CommandFactory, Parser};
use evidence_vault::cli::{self, App, Cli};
use evidence_vault::error::{describe_error_code, VaultError};
use tracing::{debug, trace};

fn init_logging(verbose: u8, configured_level: &str) {
    let log_level = match verbose {
        0 => configured_level,
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .init();
}

fn fail(err: &anyhow::Error, verbose: u8) -> ! {
    debug!("Fatal error: {:#}", err);

    match err.downcast_ref::<VaultError>() {
        Some(vault_err) => {
            eprintln!("Error: {}", vault_err.user_message());
            if verbose >= 1 {
                eprintln!(
                    "\n[E{:04}] {}",
                    vault_err.code(),
                    describe_error_code(vault_err.code())
                );
            }
        }
        None => eprintln!("Error: {err}"),
    }

    if verbose >= 1 {
        for (i, cause) in err.chain().enumerate().skip(1) {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(cli::exit_code_for(err));
}

fn main() {
    let cli = Cli::parse();

    let config = match cli::resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            init_logging(cli.verbose, "warn");
            fail(&err, cli.verbose);
        }
    };

    init_logging(cli.verbose, &config.log_level);
    debug!("evidence-vault started with verbosity level: {}", cli.verbose);
    trace!("Resolved configuration: {:?}", config);

    let Some(command) = cli.command else {
        if let Err(err) = Cli::command().print_help() {
            fail(&anyhow::Error::from(err), cli.verbose);
        }
        return;
    };

    let result = App::new(config).and_then(|mut app| app.execute(command));
    if let Err(err) = result {
        fail(&err, cli.verbose);
    }
}
