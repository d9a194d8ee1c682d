use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use anyhow::Context as _;
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

fn asset_str(name: &str) -> String {
    let file = Asset::get(name).expect("embedded asset must exist");
    std::str::from_utf8(file.data.as_ref())
        .expect("embedded asset must be UTF-8")
        .to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub source_config_file: Option<PathBuf>,
    pub solution: SolutionConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolutionConfig {
    /// Extension of solution source files, without the dot.
    pub extension: String,
    /// Contents written by `comp init` and contest acquisition.
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub compiler: String,
    pub std: String,
}

impl Default for SolutionConfig {
    fn default() -> Self {
        Self {
            extension: "cpp".to_owned(),
            template: asset_str(Config::TEMPLATE_ASSET),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: "g++".to_owned(),
            std: "c++17".to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_config_file: None,
            solution: SolutionConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl Config {
    pub const FILENAME: &str = "comp.toml";
    const TEMPLATE_ASSET: &str = "template.cpp";

    pub fn example_toml() -> String {
        asset_str(Self::FILENAME)
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: PathBuf) -> anyhow::Result<Self> {
        let toml = crate::fsutil::read_to_string(&filepath).context("Cannot read a file")?;
        let mut cfg = Self::from_toml(&toml)
            .with_context(|| format!("Invalid config TOML: {:?}", filepath))?;
        cfg.source_config_file = Some(filepath);
        Ok(cfg)
    }

    /// Find config file in ancestor dirs, including current dir.
    pub fn find_file_in_ancestors(cur_dir: impl AsRef<Path>) -> Option<PathBuf> {
        cur_dir
            .as_ref()
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
    }

    /// A missing config file is not an error: the embedded defaults make the
    /// tool usable with zero setup.
    pub fn from_file_finding_in_ancestors_or_default(
        cur_dir: impl AsRef<Path>,
    ) -> anyhow::Result<Self> {
        match Self::find_file_in_ancestors(cur_dir) {
            Some(filepath) => Self::from_toml_file(filepath),
            None => Ok(Self::default()),
        }
    }
}
