use serde::{de::Visitor, Deserialize};
use std::{
    ops::Deref,
    path::{Path, PathBuf},
};
use url::Url;

pub const DEFAULT_SQLITE_FILE: &str = "dogs.db";
pub const DEFAULT_API_BASE: &str = "https://dog.ceo/api/";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DbConfig {
    pub sqlite_file: DbFile,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            sqlite_file: DbFile(PathBuf::from(DEFAULT_SQLITE_FILE)),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: Url,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: Url::parse(DEFAULT_API_BASE).expect("default api url is valid"),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub db: DbConfig,
    pub api: ApiConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> crate::model::Result<Config> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

/// Path to the sqlite file. The file may not exist yet, but the directory it
/// lives in must.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbFile(PathBuf);

impl DbFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbFile(path.into())
    }
}

impl<'de> Deserialize<'de> for DbFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DbFileVisitor;
        impl Visitor<'_> for DbFileVisitor {
            type Value = DbFile;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a path to a sqlite file in an existing directory")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let path = PathBuf::from(v);
                let Some(file_name) = path.file_name() else {
                    return Err(E::custom(format!("`{}` does not name a file", v)));
                };

                let parent = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };

                Ok(DbFile(
                    parent.canonicalize().map_err(E::custom)?.join(file_name),
                ))
            }
        }

        deserializer.deserialize_str(DbFileVisitor)
    }
}

impl Deref for DbFile {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.0.as_path()
    }
}
