use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{command, handler::Handler},
    config::Config,
    error::AppError,
    state::AppState,
};

/// Builds the Discord client with the slash command framework and event handler attached.
///
/// Slash commands are registered globally once the gateway reports ready.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to commands and event handlers
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS;

    let framework_state = state.clone();
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::all(),
            on_error: |error| Box::pin(command::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                tracing::info!(
                    "Registered {} slash commands",
                    framework.options().commands.len()
                );

                Ok(framework_state)
            })
        })
        .build();

    let client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Runs the Discord client until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
