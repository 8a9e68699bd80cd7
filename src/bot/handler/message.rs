use serenity::all::{Context, Message};

/// Answers a `hello` in a guild channel with a greeting.
pub async fn handle_message(ctx: Context, message: Message) {
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    if !is_greeting(&message.content) {
        return;
    }

    if let Err(e) = message
        .channel_id
        .say(&ctx.http, greeting(&message.author.name))
        .await
    {
        tracing::error!(
            "Failed to greet {} in channel {}: {}",
            message.author.id,
            message.channel_id,
            e
        );
    }
}

fn is_greeting(content: &str) -> bool {
    content.trim().eq_ignore_ascii_case("hello")
}

fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}
