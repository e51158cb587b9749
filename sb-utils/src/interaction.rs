use twilight_model::{
    application::interaction::Interaction,
    id::{
        Id,
        marker::{RoleMarker, UserMarker},
    },
};

/// The guild member who invoked an interaction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invoker {
    pub id: Id<UserMarker>,
    pub name: String,
    pub roles: Vec<Id<RoleMarker>>,
}

impl Invoker {
    /// Extract the invoking member, if the interaction came from a guild.
    ///
    /// Direct-message interactions carry no member and yield `None`.
    pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
        let member = interaction.member.as_ref()?;
        let user = interaction.author()?;

        Some(Self {
            id: user.id,
            name: user.name.clone(),
            roles: member.roles.clone(),
        })
    }

    /// Mention markup for this member.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id.get())
    }
}
