use crate::cli::opts::{Cli, Command};

use anyhow::Result;
use scriptconf_core::{ensure_dir, ConfigMap, ConfigStore, StoreOptions};
use serde_json::Value;
use std::io::{stdin, stdout, Write};

pub fn run_cli(args: Cli) -> Result<()> {
    let mut store = open_store(&args)?;
    match args.cmd {
        Command::Show => {
            let data = store.read()?;
            print_config(&data)?;
        }
        Command::Init => {
            let data = store.initialize()?;
            print_config(&data)?;
        }
        Command::Path => println!("{}", store.path().display()),
    }
    Ok(())
}

fn open_store(args: &Cli) -> Result<ConfigStore> {
    // An overridden root may not exist yet.
    let root = match &args.root {
        Some(dir) => Some(ensure_dir(dir)?),
        None => None,
    };
    let mut opts = StoreOptions {
        name: args.name.clone(),
        version: args.app_version.clone(),
        root,
        providers: Vec::new(),
    };
    if args.interactive {
        opts.providers.push(Box::new(prompt_entries));
    }
    Ok(ConfigStore::with_options(opts))
}

/// Collect key=value pairs from the terminal until an empty line.
fn prompt_entries() -> ConfigMap {
    let mut extra = ConfigMap::new();
    loop {
        print!("key=value (empty line to finish): ");
        let _ = stdout().flush();
        let mut line = String::new();
        if stdin().read_line(&mut line).is_err() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                extra.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
            }
            None => println!("enter key=value"),
        }
    }
    extra
}

fn print_config(data: &ConfigMap) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}
