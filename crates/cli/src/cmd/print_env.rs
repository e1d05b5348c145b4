use anyhow::{Result, bail};

use csglue_lib::platform::{Environment, SystemEnvironment};

use super::EXIT_SUCCESS;

pub fn cmd_print_env(name: &str) -> Result<i32> {
  let Some(value) = SystemEnvironment.var(name) else {
    bail!("Environment variable {} is not set", name);
  };
  println!("{}", value.to_string_lossy());
  Ok(EXIT_SUCCESS)
}
