//! Typed parameters for each `vip` sub-command.

use std::collections::HashMap;

use twilight_model::{
    application::interaction::application_command::{CommandDataOption, CommandOptionValue},
    id::{Id, marker::UserMarker},
};

/// The `vip` sub-commands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SubCommand {
    Category,
    Cache,
    Purge,
    Downvote,
    Undovote,
    AddVip,
    Lookup,
    Unwarn,
    Lock,
    BanStatus,
}

impl SubCommand {
    pub const ALL: [Self; 10] = [
        Self::Category,
        Self::Cache,
        Self::Purge,
        Self::Downvote,
        Self::Undovote,
        Self::AddVip,
        Self::Lookup,
        Self::Unwarn,
        Self::Lock,
        Self::BanStatus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Cache => "cache",
            Self::Purge => "purge",
            Self::Downvote => "downvote",
            Self::Undovote => "undovote",
            Self::AddVip => "addvip",
            Self::Lookup => "lookup",
            Self::Unwarn => "unwarn",
            Self::Lock => "lock",
            Self::BanStatus => "banstatus",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sub| sub.name() == name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("interaction carries no sub-command")]
    MissingSubCommand,
    #[error("unknown sub-command `{0}`")]
    UnknownSubCommand(String),
    #[error("missing required option `{0}`")]
    MissingRequired(&'static str),
}

/// Parsed `vip` invocation.
///
/// Optional options are `None` when absent or empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VipCommand {
    Category {
        uuid: Option<String>,
        category: Option<String>,
    },
    Cache {
        video_id: Option<String>,
    },
    Purge {
        video_id: Option<String>,
    },
    Downvote {
        uuid: Option<String>,
    },
    Undovote {
        uuid: Option<String>,
    },
    AddVip {
        user: Id<UserMarker>,
        video_id: String,
    },
    Lookup {
        public_id: String,
    },
    Unwarn {
        public_id: String,
    },
    Lock {
        video_id: Option<String>,
        reason: Option<String>,
    },
    BanStatus {
        public_id: String,
    },
}

impl VipCommand {
    /// Parse the top-level options of a `vip` interaction.
    pub fn parse(options: &[CommandDataOption]) -> Result<Self, OptionsError> {
        let root = options.first().ok_or(OptionsError::MissingSubCommand)?;
        let CommandOptionValue::SubCommand(nested) = &root.value else {
            return Err(OptionsError::MissingSubCommand);
        };
        let sub_command = SubCommand::from_name(&root.name)
            .ok_or_else(|| OptionsError::UnknownSubCommand(root.name.clone()))?;
        let args = Args::new(nested);

        Ok(match sub_command {
            SubCommand::Category => Self::Category {
                uuid: args.string("uuid"),
                category: args.string("category"),
            },
            SubCommand::Cache => Self::Cache {
                video_id: args.string("videoid"),
            },
            SubCommand::Purge => Self::Purge {
                video_id: args.string("videoid"),
            },
            SubCommand::Downvote => Self::Downvote {
                uuid: args.string("uuid"),
            },
            SubCommand::Undovote => Self::Undovote {
                uuid: args.string("uuid"),
            },
            SubCommand::AddVip => Self::AddVip {
                user: args.user("user").ok_or(OptionsError::MissingRequired("user"))?,
                video_id: args.required_string("videoid")?,
            },
            SubCommand::Lookup => Self::Lookup {
                public_id: args.required_string("publicid")?,
            },
            SubCommand::Unwarn => Self::Unwarn {
                public_id: args.required_string("publicid")?,
            },
            SubCommand::Lock => Self::Lock {
                video_id: args.string("videoid"),
                reason: args.string("reason"),
            },
            SubCommand::BanStatus => Self::BanStatus {
                public_id: args.required_string("publicid")?,
            },
        })
    }

    pub fn sub_command(&self) -> SubCommand {
        match self {
            Self::Category { .. } => SubCommand::Category,
            Self::Cache { .. } => SubCommand::Cache,
            Self::Purge { .. } => SubCommand::Purge,
            Self::Downvote { .. } => SubCommand::Downvote,
            Self::Undovote { .. } => SubCommand::Undovote,
            Self::AddVip { .. } => SubCommand::AddVip,
            Self::Lookup { .. } => SubCommand::Lookup,
            Self::Unwarn { .. } => SubCommand::Unwarn,
            Self::Lock { .. } => SubCommand::Lock,
            Self::BanStatus { .. } => SubCommand::BanStatus,
        }
    }
}

/// Sub-command options indexed by name; the first occurrence of a name wins.
struct Args<'a> {
    values: HashMap<&'a str, &'a CommandOptionValue>,
}

impl<'a> Args<'a> {
    fn new(options: &'a [CommandDataOption]) -> Self {
        let mut values = HashMap::with_capacity(options.len());
        for option in options {
            values.entry(option.name.as_str()).or_insert(&option.value);
        }
        Self { values }
    }

    fn string(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            CommandOptionValue::String(value) if !value.is_empty() => Some(value.clone()),
            _ => None,
        }
    }

    fn required_string(&self, name: &'static str) -> Result<String, OptionsError> {
        self.string(name).ok_or(OptionsError::MissingRequired(name))
    }

    fn user(&self, name: &str) -> Option<Id<UserMarker>> {
        match self.values.get(name)? {
            CommandOptionValue::User(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, value: CommandOptionValue) -> CommandDataOption {
        CommandDataOption {
            name: name.to_owned(),
            value,
        }
    }

    fn string(name: &str, value: &str) -> CommandDataOption {
        option(name, CommandOptionValue::String(value.to_owned()))
    }

    fn invocation(sub_command: &str, nested: Vec<CommandDataOption>) -> Vec<CommandDataOption> {
        vec![option(sub_command, CommandOptionValue::SubCommand(nested))]
    }

    #[test]
    fn sub_command_names_round_trip() {
        for sub_command in SubCommand::ALL {
            assert_eq!(SubCommand::from_name(sub_command.name()), Some(sub_command));
        }
        assert_eq!(SubCommand::from_name("ban"), None);
    }

    #[test]
    fn missing_optional_values_resolve_to_none() {
        let parsed = VipCommand::parse(&invocation("lock", vec![])).unwrap();
        assert_eq!(
            parsed,
            VipCommand::Lock {
                video_id: None,
                reason: None
            }
        );

        let empty = VipCommand::parse(&invocation("cache", vec![string("videoid", "")])).unwrap();
        assert_eq!(empty, VipCommand::Cache { video_id: None });
    }

    #[test]
    fn first_matching_option_wins() {
        let parsed = VipCommand::parse(&invocation(
            "category",
            vec![
                string("uuid", "first"),
                string("uuid", "second"),
                string("category", "sponsor"),
            ],
        ))
        .unwrap();
        assert_eq!(
            parsed,
            VipCommand::Category {
                uuid: Some("first".to_owned()),
                category: Some("sponsor".to_owned()),
            }
        );
    }

    #[test]
    fn addvip_requires_user_and_video() {
        let parsed = VipCommand::parse(&invocation(
            "addvip",
            vec![
                option("user", CommandOptionValue::User(Id::new(55))),
                string("videoid", "dQw4w9WgXcQ"),
            ],
        ))
        .unwrap();
        assert_eq!(
            parsed,
            VipCommand::AddVip {
                user: Id::new(55),
                video_id: "dQw4w9WgXcQ".to_owned(),
            }
        );

        let missing_user =
            VipCommand::parse(&invocation("addvip", vec![string("videoid", "dQw4w9WgXcQ")]));
        assert_eq!(missing_user, Err(OptionsError::MissingRequired("user")));
    }

    #[test]
    fn wrong_option_type_counts_as_absent() {
        let parsed = VipCommand::parse(&invocation(
            "banstatus",
            vec![option("publicid", CommandOptionValue::Boolean(true))],
        ));
        assert_eq!(parsed, Err(OptionsError::MissingRequired("publicid")));
    }

    #[test]
    fn rejects_unknown_or_missing_sub_command() {
        assert_eq!(
            VipCommand::parse(&[]),
            Err(OptionsError::MissingSubCommand)
        );
        assert_eq!(
            VipCommand::parse(&[string("uuid", "x")]),
            Err(OptionsError::MissingSubCommand)
        );
        assert_eq!(
            VipCommand::parse(&invocation("nuke", vec![])),
            Err(OptionsError::UnknownSubCommand("nuke".to_owned()))
        );
    }

    #[test]
    fn parsed_variant_reports_its_sub_command() {
        let parsed =
            VipCommand::parse(&invocation("unwarn", vec![string("publicid", "abc")])).unwrap();
        assert_eq!(parsed.sub_command(), SubCommand::Unwarn);
    }
}
