use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal single-page app: Home, About (remote posts) and a guarded Auth page.
#[derive(Debug, Parser)]
#[command(name = "postdeck", version, about)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/postdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Route to open on start
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    pub path: String,

    /// Override the posts endpoint
    #[arg(long, value_name = "URL")]
    pub posts_url: Option<String>,

    /// Let the auth guard through
    #[arg(long)]
    pub authenticated: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(url) = &self.posts_url {
            config.posts.url = url.clone();
        }
        if self.authenticated {
            config.auth.authenticated = true;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_root_path() {
        let cli = Cli::parse_from(["postdeck"]);
        assert_eq!(cli.path, "/");
        assert!(!cli.authenticated);
        assert!(cli.config.is_none());
    }

    #[test]
    fn overrides_apply_on_top_of_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[auth]\nauthenticated = false").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "postdeck",
            "--config",
            path.as_str(),
            "--posts-url",
            "http://127.0.0.1:9/posts",
            "--authenticated",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.posts.url, "http://127.0.0.1:9/posts");
        assert!(config.auth.authenticated);
    }

    #[test]
    fn invalid_override_fails_validation() {
        let cli = Cli::parse_from(["postdeck", "--posts-url", "nope"]);
        assert!(cli.load_config().is_err());
    }
}
