use anyhow::{Error, Result};
use chat_notifier::{
    cli::{ChatCommand, Command, TopLevel},
    config::{Config, LogFormat},
    utils::process_notification,
};
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args: TopLevel = argp::parse_args_or_exit(argp::DEFAULT);
    let config = Config::load()?;

    init_tracing(config.log_format);

    match args.command {
        Command::Chat(chat) => match chat.command {
            ChatCommand::WorkflowNotification(notification) => {
                let config = config.with_webhook_url(notification.webhook_url);
                let status = process_notification(&config, Utc::now()).await?;
                info!(%status, "Workflow notification finished");
            }
        },
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
