use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use stilla_web_app::log;

pub struct LocalStorage;

const KEY_INSTALL_BANNER_DISMISSED: &str = "desktop-install-dismissed";

impl stilla_web_app::Repository for LocalStorage {
    async fn read_install_banner_dismissed(&self) -> Result<bool, String> {
        match gloo_storage::LocalStorage::get(KEY_INSTALL_BANNER_DISMISSED) {
            Ok(dismissed) => Ok(dismissed),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(false),
                err => Err(err),
            },
        }
        .map_err(|err| err.to_string())
    }

    async fn write_install_banner_dismissed(&self) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_INSTALL_BANNER_DISMISSED, true)
            .map_err(|err| err.to_string())
    }
}

const KEY_LOG: &str = "log";
const MAX_LOG_ENTRIES: usize = 100;

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
