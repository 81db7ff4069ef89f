use clap::Parser;
use prompt_enhancer::config::cli::{Cli, Command};
use prompt_enhancer::config::{LAST_MODE_STORAGE_KEY, THEME_STORAGE_KEY};
use prompt_enhancer::utils::{logger, validation::Validate};
use prompt_enhancer::{
    EnhanceClient, EnhanceError, EnhanceMode, KeyStore, LocalStore, ServiceConfig,
};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    // Not the full args: `set-key` carries the credential.
    tracing::debug!("data dir: {}", cli.data_dir);

    let config = ServiceConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = LocalStore::new(cli.data_dir.clone());
    let mut client = EnhanceClient::new(store.clone(), config);

    if let Err(e) = run(cli.command, &mut client, &store).await {
        eprintln!("❌ {}", e);
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn run(
    command: Command,
    client: &mut EnhanceClient<LocalStore>,
    store: &LocalStore,
) -> prompt_enhancer::Result<()> {
    match command {
        Command::Enhance { prompt, mode } => {
            if !client.initialize().await? {
                eprintln!("⚙️  No API key configured. Run `prompt-enhancer set-key <KEY>` first.");
                return Err(EnhanceError::NotConfiguredError);
            }

            let prompt = match prompt {
                Some(text) => text,
                None => read_stdin()?,
            };

            let mode = match mode {
                Some(mode) => mode,
                None => store
                    .get(LAST_MODE_STORAGE_KEY)
                    .await?
                    .map(|saved| EnhanceMode::from_stored(&saved))
                    .unwrap_or(EnhanceMode::Basic),
            };

            tracing::info!("Enhancing prompt (mode: {})", mode);
            let enhanced = client.enhance(&prompt, mode).await?;
            store.set(LAST_MODE_STORAGE_KEY, mode.as_str()).await?;

            println!("{}", enhanced);
        }

        Command::SetKey { key } => {
            // Trim here, as the upstream settings surface does; the client
            // takes the candidate as given.
            let key = key.trim();
            tracing::info!("Validating API key against the service");
            client.validate_api_key(key).await?;
            client.save_api_key(key).await?;
            println!("✅ API key validated and saved");
        }

        Command::Status => {
            if client.initialize().await? {
                println!("✅ API key configured");
            } else {
                println!("⚙️  No API key configured");
            }
        }

        Command::Theme { theme } => match theme {
            Some(theme) => {
                store.set(THEME_STORAGE_KEY, theme.as_str()).await?;
                println!("✅ Theme set to {}", theme.as_str());
            }
            None => {
                let current = store
                    .get(THEME_STORAGE_KEY)
                    .await?
                    .unwrap_or_else(|| "light".to_string());
                println!("{}", current);
            }
        },
    }

    Ok(())
}

fn read_stdin() -> prompt_enhancer::Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn exit_code(e: &EnhanceError) -> i32 {
    match e {
        EnhanceError::KeyFormatError { .. }
        | EnhanceError::InputTooShortError { .. }
        | EnhanceError::NotConfiguredError => 2,
        _ => 1,
    }
}
