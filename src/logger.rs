use std::fmt::Debug;

pub trait LogExt<T> {
  fn log_warn(self, snippet: &str) -> anyhow::Result<T>;
  fn log_error(self, snippet: &str) -> anyhow::Result<T>;
}

impl<T> LogExt<T> for Option<T> {
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Some(value) => Ok(value),
      None => {
        let location = std::panic::Location::caller().to_string();

        log::warn!("[{location}] {msg}");

        anyhow::bail!(msg.to_string())
      }
    }
  }

  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Some(value) => Ok(value),
      None => {
        let location = std::panic::Location::caller().to_string();

        log::error!("[{location}] {msg}");

        anyhow::bail!(msg.to_string())
      }
    }
  }
}

impl<T, E> LogExt<T> for Result<T, E>
where
  E: Debug,
{
  fn log_warn(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => {
        let location = std::panic::Location::caller().to_string();

        log::warn!("[{location}] {msg}: {error:?}");

        anyhow::bail!("{msg}: {error:?}")
      }
    }
  }

  fn log_error(self, msg: &str) -> anyhow::Result<T> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => {
        let location = std::panic::Location::caller().to_string();

        log::error!("[{location}] {msg}: {error:?}");

        anyhow::bail!("{msg}: {error:?}")
      }
    }
  }
}
