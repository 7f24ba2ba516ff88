use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::config::{expandenv, CommonConfig, PathSet};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "ClientConfig::default_api_url")]
    pub api_url: String,

    /// Directory of the durable session store, defaults to `session` under
    /// the data directory.
    #[serde(default)]
    pub session_dir: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub accept_invalid_certs: bool,

    #[serde(default)]
    pub clear_user_on_unauthorized: bool,
}

impl CommonConfig for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: Self::default_api_url(),
            session_dir: String::new(),
            timeout_secs: None,
            accept_invalid_certs: false,
            clear_user_on_unauthorized: false,
        }
    }

    fn complete(&mut self, ps: &PathSet) -> Result<()> {
        if let Ok(url) = env::var("VLE_API_URL") {
            self.api_url = url;
        }
        self.api_url = expandenv("api_url", &self.api_url)?;
        self.api_url = self.api_url.trim_end_matches('/').to_string();
        if self.api_url.is_empty() {
            bail!("api_url cannot be empty");
        }

        let parsed = Url::parse(&self.api_url)
            .with_context(|| format!("invalid api url '{}'", self.api_url))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => bail!("invalid api url scheme, expect 'http' or 'https', not '{scheme}'"),
        }

        self.session_dir = if self.session_dir.is_empty() {
            format!("{}", ps.data_path.join("session").display())
        } else {
            expandenv("session_dir", &self.session_dir)?
        };

        if let Some(0) = self.timeout_secs {
            bail!("timeout_secs must be greater than 0");
        }

        Ok(())
    }
}

impl ClientConfig {
    pub fn default_api_url() -> String {
        String::from("https://api.vle.digital")
    }

    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(&self.session_dir)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn path_set(name: &str) -> PathSet {
        let base = PathBuf::from(name);
        let _ = fs::remove_dir_all(&base);
        PathSet::new(Some(base.join("config")), Some(base.join("data"))).unwrap()
    }

    #[test]
    fn test_defaults_when_missing() {
        let ps = path_set("_test_client_config_default");
        let cfg: ClientConfig = ps.load_config("client", ClientConfig::default).unwrap();

        if env::var("VLE_API_URL").is_err() {
            assert_eq!(cfg.api_url, "https://api.vle.digital");
        }
        assert_eq!(cfg.session_path(), ps.data_path.join("session"));
        assert!(!cfg.clear_user_on_unauthorized);

        fs::remove_dir_all("_test_client_config_default").unwrap();
    }

    #[test]
    fn test_load_file() {
        let ps = path_set("_test_client_config_file");
        fs::write(
            ps.config_path.join("client.toml"),
            "session_dir = \"/tmp/vle-session\"\ntimeout_secs = 30\nclear_user_on_unauthorized = true\n",
        )
        .unwrap();

        let cfg: ClientConfig = ps.load_config("client", ClientConfig::default).unwrap();
        assert_eq!(cfg.session_dir, "/tmp/vle-session");
        assert_eq!(cfg.timeout_secs, Some(30));
        assert!(cfg.clear_user_on_unauthorized);

        fs::remove_dir_all("_test_client_config_file").unwrap();
    }

    #[test]
    fn test_reject_bad_url() {
        let ps = path_set("_test_client_config_bad");

        let mut cfg = ClientConfig::default();
        cfg.api_url = String::from("ftp://api.vle.digital");
        // The environment override would replace the value under test.
        if env::var("VLE_API_URL").is_err() {
            assert!(cfg.complete(&ps).is_err());
        }

        let mut cfg = ClientConfig::default();
        cfg.timeout_secs = Some(0);
        assert!(cfg.complete(&ps).is_err());

        fs::remove_dir_all("_test_client_config_bad").unwrap();
    }
}
