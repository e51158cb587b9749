use twilight_model::application::command::{Command, CommandOption, CommandType};
use twilight_util::builder::command::{
    CommandBuilder, StringBuilder, SubCommandBuilder, UserBuilder,
};

use super::lock::CATEGORIES;
use super::options::SubCommand;

pub const COMMAND_NAME: &str = "vip";

fn uuid_option() -> CommandOption {
    StringBuilder::new("uuid", "UUID of segment").build()
}

fn video_id_option() -> CommandOption {
    StringBuilder::new("videoid", "YouTube video ID").build()
}

fn public_id_option() -> CommandOption {
    StringBuilder::new("publicid", "Public user ID")
        .required(true)
        .build()
}

fn category_option() -> CommandOption {
    StringBuilder::new("category", "Category to change to")
        .choices(CATEGORIES.map(|category| (category, category)))
        .build()
}

fn sub_command(sub_command: SubCommand) -> SubCommandBuilder {
    let description = match sub_command {
        SubCommand::Category => "Change category",
        SubCommand::Cache => "Clear redis cache for a video",
        SubCommand::Purge => "Purge all segments on a video",
        SubCommand::Downvote => "Downvote a segment",
        SubCommand::Undovote => "Undo a downvote on a segment",
        SubCommand::AddVip => "Grant temporary VIP to a user",
        SubCommand::Lookup => "Look up Discord ID from SBID",
        SubCommand::Unwarn => "Remove warning from a user",
        SubCommand::Lock => "Lock categories",
        SubCommand::BanStatus => "Get ban status of user",
    };

    let builder = SubCommandBuilder::new(sub_command.name(), description);
    match sub_command {
        SubCommand::Category => builder.option(uuid_option()).option(category_option()),
        SubCommand::Cache | SubCommand::Purge => builder.option(video_id_option()),
        SubCommand::Downvote | SubCommand::Undovote => builder.option(uuid_option()),
        SubCommand::AddVip => builder
            .option(UserBuilder::new("user", "Discord user").required(true))
            .option(
                StringBuilder::new("videoid", "Video ID from channel to grant VIP on")
                    .required(true),
            ),
        SubCommand::Lookup | SubCommand::Unwarn | SubCommand::BanStatus => {
            builder.option(public_id_option())
        }
        SubCommand::Lock => builder
            .option(video_id_option())
            .option(StringBuilder::new("reason", "Custom lock reason")),
    }
}

/// The `vip` chat-input command with every sub-command.
pub fn vip_command() -> anyhow::Result<Command> {
    let command = SubCommand::ALL.into_iter().fold(
        CommandBuilder::new(COMMAND_NAME, "VIP-only commands", CommandType::ChatInput),
        |builder, sub| builder.option(sub_command(sub)),
    );

    Ok(command.validate()?.build())
}
