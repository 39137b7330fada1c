use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use pushkind_chairs::commands::Session;
use pushkind_chairs::repository::InMemoryRepository;
use pushkind_chairs::services::ServiceError;
use pushkind_chairs::settings::Settings;

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("CHAIRS_CONFIG").map(PathBuf::from))
}

fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Type 'help' for commands, 'quit' to exit.")?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if !trimmed.is_empty() {
            match session.execute(trimmed) {
                Ok(output) => writeln!(stdout, "{output}")?,
                Err(ServiceError::Internal) => writeln!(stdout, "Something went wrong")?,
                Err(e) => writeln!(stdout, "Error: {e}")?,
            }
            for note in session.drain_notifications() {
                writeln!(stdout, "[{}] {}", note.title, note.description)?;
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let path = config_path();
    let settings = match Settings::load(path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };
    let catalog = match settings.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to build catalog: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Loaded {} chair types, {} start times",
        catalog.categories.len(),
        catalog.time_slots.len()
    );

    let mut session = Session::new(
        InMemoryRepository::new(catalog),
        settings.app.user_name,
        settings.app.upcoming_preview,
    );

    match run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to read input: {e}");
            ExitCode::FAILURE
        }
    }
}
