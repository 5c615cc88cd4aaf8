use crate::global::ConsoleHome;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(home: Option<&Path>, command: super::ConfigCommand) -> Result<()> {
    let home = match home {
        Some(path) => ConsoleHome::at(path)?,
        None => ConsoleHome::init()?,
    };
    let mut config = Config::load(&home.config_path)?;

    match command {
        super::ConfigCommand::Get { key } => match config.get(&key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!("Unknown config key: {}", key),
        },
        super::ConfigCommand::Set { key, value } => {
            config.set(&key, &value)?;
            config.save(&home.config_path)?;
            println!("Set {} = {}", key, value);
        }
        super::ConfigCommand::List => {
            let items = config.list();
            let max_key_len = items.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, value) in items {
                println!("{:width$}  {}", key, value, width = max_key_len);
            }
        }
        super::ConfigCommand::Path => {
            println!("{}", home.config_path.display());
        }
    }

    Ok(())
}
