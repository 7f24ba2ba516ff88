use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::debug;

use crate::api::Api;
use crate::config::{CommonConfig, PathSet};
use crate::session::file::FileStore;
use crate::session::Session;

use super::config::ClientConfig;
use super::transport::ReqwestTransport;
use super::Client;

pub struct ClientFactory {
    cfg: ClientConfig,
}

impl ClientFactory {
    pub fn load(ps: &PathSet) -> Result<Self> {
        let cfg = ps.load_config("client", ClientConfig::default)?;
        Ok(Self { cfg })
    }

    pub fn build_session(&self) -> Result<Session> {
        let store = FileStore::open(self.cfg.session_path())?;
        debug!("Use session store at '{}'", store.dir().display());
        Ok(Session::new(Arc::new(store)))
    }

    pub fn build_client(&self) -> Result<Client> {
        let transport = ReqwestTransport::builder()
            .timeout(self.cfg.timeout_secs.map(Duration::from_secs))
            .accept_invalid_certs(self.cfg.accept_invalid_certs)
            .build()?;
        let session = self.build_session()?;

        let client = Client::new(&self.cfg.api_url, Arc::new(transport), session)
            .clear_user_on_unauthorized(self.cfg.clear_user_on_unauthorized);
        Ok(client)
    }

    pub fn build_api(&self) -> Result<Api> {
        Ok(Api::new(self.build_client()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_load_and_build() {
        let base = PathBuf::from("_test_client_factory");
        let _ = fs::remove_dir_all(&base);
        let ps = PathSet::new(Some(base.join("config")), Some(base.join("data"))).unwrap();
        fs::write(
            ps.config_path.join("client.toml"),
            "api_url = \"http://localhost:8080/\"\nclear_user_on_unauthorized = true\n",
        )
        .unwrap();

        let factory = ClientFactory::load(&ps).unwrap();
        assert_eq!(factory.config().session_path(), ps.data_path.join("session"));

        let api = factory.build_api().unwrap();
        if std::env::var("VLE_API_URL").is_err() {
            assert_eq!(api.client().url(), "http://localhost:8080");
        }
        assert!(!api.session().is_logged_in());
        assert!(ps.data_path.join("session").is_dir());

        fs::remove_dir_all(&base).unwrap();
    }
}
