use std::sync::Arc;

use crate::application::ports::account_repository::AccountRepository;
use crate::application::ports::sign_off_log::SignOffLog;
use crate::application::ports::sign_off_repository::SignOffRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    account_repo: Arc<dyn AccountRepository>,
    sign_off_repo: Arc<dyn SignOffRepository>,
    sign_off_log: Arc<dyn SignOffLog>,
}

impl AppServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        sign_off_repo: Arc<dyn SignOffRepository>,
        sign_off_log: Arc<dyn SignOffLog>,
    ) -> Self {
        Self {
            account_repo,
            sign_off_repo,
            sign_off_log,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn account_repo(&self) -> Arc<dyn AccountRepository> {
        self.services.account_repo.clone()
    }

    pub fn sign_off_repo(&self) -> Arc<dyn SignOffRepository> {
        self.services.sign_off_repo.clone()
    }

    pub fn sign_off_log(&self) -> Arc<dyn SignOffLog> {
        self.services.sign_off_log.clone()
    }
}
