use std::path::PathBuf;

pub const CHAMPIONS_FILE: &str = "champions.json";
pub const OUTPUT_FILE: &str = "champion_imgs.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub champions_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    /// Paths are fixed, relative to the working directory.
    pub fn new() -> Self {
        Config {
            champions_path: PathBuf::from(CHAMPIONS_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
