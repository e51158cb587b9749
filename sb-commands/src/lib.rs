pub mod browser;
pub mod vip;

use twilight_model::{
    application::{command::Command, interaction::InteractionData},
    gateway::payload::incoming::InteractionCreate,
};

use sb_core::Context;
use sb_utils::interaction::Invoker;
use sb_utils::response::{API_ERROR, ephemeral_message};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CommandRoute {
    Vip,
    OpenInBrowser,
}

fn route_command(name: &str) -> Option<CommandRoute> {
    const ROUTES: [(&str, CommandRoute); 2] = [
        (vip::schema::COMMAND_NAME, CommandRoute::Vip),
        (browser::COMMAND_NAME, CommandRoute::OpenInBrowser),
    ];

    ROUTES
        .into_iter()
        .find_map(|(command, route)| (command == name).then_some(route))
}

/// Every application command this bot registers.
pub fn commands() -> anyhow::Result<Vec<Command>> {
    Ok(vec![vip::schema::vip_command()?, browser::command()])
}

/// Answer an application-command interaction.
///
/// Component and modal interactions belong to other handlers and are ignored.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let Some(InteractionData::ApplicationCommand(data)) = interaction.data.as_ref() else {
        return Ok(());
    };

    let Some(route) = route_command(&data.name) else {
        return Ok(());
    };

    let response = match route {
        CommandRoute::Vip => {
            let invoker = Invoker::from_interaction(&interaction);
            vip::run(&ctx, invoker.as_ref(), &data.options)
                .await
                .unwrap_or_else(|vip::UpstreamError| ephemeral_message(API_ERROR))
        }
        CommandRoute::OpenInBrowser => browser::run(data),
    };

    ctx.http
        .interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}
