#![warn(clippy::pedantic)]

pub mod detail;
pub mod install;
pub mod log;
pub mod page_meta;
pub mod service_worker;
pub mod share;

/// Persisted UI flags. The only one is the desktop install suggestion
/// dismissal, written once and never cleared.
#[allow(async_fn_in_trait)]
pub trait Repository {
    async fn read_install_banner_dismissed(&self) -> Result<bool, String>;
    async fn write_install_banner_dismissed(&self) -> Result<(), String>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: Repository> Service<R> {
    pub async fn install_banner_dismissed(&self) -> Result<bool, String> {
        self.repository.read_install_banner_dismissed().await
    }

    pub async fn dismiss_install_banner(&self) -> Result<(), String> {
        self.repository.write_install_banner_dismissed().await
    }
}
