use std::fs;
use std::path::{Path, PathBuf};

use champion_imgs::config::Config;

pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "champion_imgs_it_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        Scratch { dir }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn config(&self) -> Config {
        Config {
            champions_path: self.path("champions.json"),
            output_path: self.path("champion_imgs.json"),
        }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

pub fn write(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}
