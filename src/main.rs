use champion_imgs::config::Config;
use champion_imgs::display::output::display_error;
use champion_imgs::error::AppError;
use champion_imgs::generate;

fn main() {
    if let Err(e) = run() {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::new();
    generate(&config)?;
    Ok(())
}
