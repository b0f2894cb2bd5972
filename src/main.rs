use clap::Parser;
use extnote::application::{AccessService, ConfigService, NoteService};
use extnote::cli::{format_config, format_content, format_status, Cli, Commands, CREDITS};
use extnote::domain::AuthorizationOutcome;
use extnote::error::ExtnoteError;
use extnote::infrastructure::Volume;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "EXTNOTE_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so stdout only carries file content
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), ExtnoteError> {
    let volume = Volume::resolve(cli.root)?;

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {
            let content = NoteService::new(volume).show()?;
            print!("{}", format_content(&content));
            Ok(())
        }
        Commands::Save { text } => {
            let content = NoteService::new(volume).save(&text)?;
            print!("{}", format_content(&content));
            Ok(())
        }
        Commands::Exit { text } => {
            NoteService::new(volume).save_and_exit(&text)?;
            println!("Saved. Goodbye!");
            Ok(())
        }
        Commands::Reset => {
            NoteService::new(volume).reset()?;
            println!("File reset");
            Ok(())
        }
        Commands::Grant => {
            let message = AccessService::new(volume).resolve(AuthorizationOutcome::Granted)?;
            println!("{}", message);
            Ok(())
        }
        Commands::Deny => {
            let message = AccessService::new(volume).resolve(AuthorizationOutcome::Denied)?;
            println!("{}", message);
            Ok(())
        }
        Commands::Status => {
            let status = AccessService::new(volume).status()?;
            print!("{}", format_status(&status));
            Ok(())
        }
        Commands::Credits => {
            print!("{}", CREDITS);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(volume);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: extnote config [--list | <key> [<value>]]");
                println!("Valid keys: file_name, access");
                Ok(())
            }
        }
    }
}
