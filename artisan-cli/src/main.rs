mod cli;

use anyhow::Context;
use artisan_core::{PromptKind, ProductId, find_prompt, product_output_target};
use artisan_engine::action::run_generation;
use artisan_runtime::client_factory::build_client_from_config;
use artisan_runtime::config_store::ConfigStore;
use artisan_runtime::image::{image_processing_notice, preview_data_url};
use artisan_runtime::secrets::{SecretKey, delete_secret, set_secret};
use artisan_runtime::ui::{StdoutSink, TerminalButton};
use clap::Parser;
use cli::{CliOptions, Command, ConfigAction};
use log::LevelFilter;
use std::io::Read;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "artisan.json";

fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = logger
            .with_module_level("reqwest", LevelFilter::Warn)
            .with_module_level("rustls", LevelFilter::Info)
            .with_module_level("hyper_util", LevelFilter::Info);
    }
    logger
        .init()
        .map_err(|e| anyhow::anyhow!("initialize logger: {e}"))
}

fn config_store(opts: &CliOptions) -> ConfigStore {
    let path = opts
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    ConfigStore::at_path(path)
}

async fn generate(opts: &CliOptions, kind: PromptKind, target: String) -> anyhow::Result<()> {
    let cfg = config_store(opts).load_or_default()?;

    let template = find_prompt(&cfg.prompts, kind)
        .with_context(|| format!("no prompt configured for {}", kind.as_str()))?;
    let client = build_client_from_config(&cfg)?;

    let button = TerminalButton::new(kind.as_str(), format!("Generate {}", template.title));
    let output = StdoutSink::new(target);
    run_generation(&button, &output, &client, &template.to_pair()).await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = CliOptions::parse();
    setup_logging(opts.debug)?;

    match &opts.command {
        Command::Bio => generate(&opts, PromptKind::ArtisanBio, "story-content".into()).await,
        Command::Describe { product_id } => {
            let target = product_output_target(&ProductId::new(product_id.clone()));
            generate(&opts, PromptKind::ProductDescription, target).await
        }
        Command::Preview { path } => {
            println!("{}", preview_data_url(path)?);
            Ok(())
        }
        Command::ProcessImage { path } => {
            println!("{}", image_processing_notice(path.as_deref()));
            Ok(())
        }
        Command::Config {
            action: ConfigAction::Init { force },
        } => {
            let store = config_store(&opts);
            store.init(*force)?;
            println!("wrote {}", store.path().display());
            Ok(())
        }
        Command::SetKey => {
            let mut key = String::new();
            std::io::stdin()
                .read_to_string(&mut key)
                .context("read API key from stdin")?;
            set_secret(SecretKey::GeminiApiKey, &key)
        }
        Command::DeleteKey => {
            if !delete_secret(SecretKey::GeminiApiKey)? {
                log::info!("no API key stored in the keyring");
            }
            Ok(())
        }
    }
}
