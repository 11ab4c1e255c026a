use crate::config::Config;
use anyhow::Result;

pub fn run() -> Result<()> {
    match Config::default().save()? {
        Some(path) => println!("Default configuration written to {}", path.display()),
        None => eprintln!("No user config directory available on this platform"),
    }
    Ok(())
}
