use std::cell::RefCell;
use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  error
};

/// String key/value persistence, shaped
/// after the browser's `localStorage`.
pub trait KeyValueStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// In-process store for native builds and
/// tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
  map: RefCell<BTreeMap<String, String>>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.map.borrow().get(key).cloned())
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.map.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

fn try_save_json<S, T>(
  store: &S,
  key: &str,
  value: &T
) -> anyhow::Result<()>
where
  S: KeyValueStore + ?Sized,
  T: Serialize + ?Sized
{
  let json =
    serde_json::to_string(value)
      .with_context(|| {
        format!(
          "failed to serialize value \
           for {key}"
        )
      })?;
  store.set_item(key, &json).with_context(
    || format!("failed to store {key}")
  )
}

fn try_load_json<S, T>(
  store: &S,
  key: &str
) -> anyhow::Result<Option<T>>
where
  S: KeyValueStore + ?Sized,
  T: DeserializeOwned
{
  let Some(raw) =
    store.get_item(key).with_context(
      || format!("failed to read {key}")
    )?
  else {
    return Ok(None);
  };
  serde_json::from_str::<T>(&raw)
    .map(Some)
    .with_context(|| {
      format!(
        "failed to parse stored value \
         for {key}"
      )
    })
}

/// Serializes `value` as JSON under
/// `key`. Failures are logged, never
/// returned.
pub fn save_json<S, T>(
  store: &S,
  key: &str,
  value: &T
) where
  S: KeyValueStore + ?Sized,
  T: Serialize + ?Sized
{
  match try_save_json(store, key, value) {
    | Ok(()) => {
      debug!(key, "saved to storage");
    }
    | Err(error) => {
      error!(
        key,
        error = ?error,
        "error saving to storage"
      );
    }
  }
}

/// Reads and parses the JSON stored under
/// `key`. Absent keys, read failures and
/// corrupt payloads all yield `None`.
pub fn load_json<S, T>(
  store: &S,
  key: &str
) -> Option<T>
where
  S: KeyValueStore + ?Sized,
  T: DeserializeOwned
{
  match try_load_json(store, key) {
    | Ok(value) => value,
    | Err(error) => {
      error!(
        key,
        error = ?error,
        "error loading from storage"
      );
      None
    }
  }
}
