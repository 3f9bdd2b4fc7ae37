use anyhow::anyhow;
use studyhub_core::storage::KeyValueStore;
use web_sys::Storage;

/// `window.localStorage` behind the core
/// key/value contract. Pair with
/// `studyhub_core::storage::{save_json,
/// load_json}`.
#[derive(Clone)]
pub struct BrowserStorage {
  inner: Storage
}

impl BrowserStorage {
  /// `None` when the page has no window
  /// or local storage is disabled.
  pub fn local() -> Option<Self> {
    web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      })
      .map(|inner| Self {
        inner
      })
  }
}

impl KeyValueStore for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self.inner.get_item(key).map_err(
      |error| {
        anyhow!(
          "localStorage read failed: \
           {error:?}"
        )
      }
    )
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .inner
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "localStorage write failed: \
           {error:?}"
        )
      })
  }
}
