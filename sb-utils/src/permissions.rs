use std::collections::HashSet;

use twilight_model::id::{Id, marker::RoleMarker};

use crate::interaction::Invoker;

/// The configured set of roles allowed to run VIP commands.
#[derive(Clone, Debug, Default)]
pub struct VipRoles {
    roles: HashSet<Id<RoleMarker>>,
}

impl VipRoles {
    pub fn new(roles: impl IntoIterator<Item = Id<RoleMarker>>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Whether any of the given roles is a VIP role.
    pub fn is_vip_role(&self, roles: &[Id<RoleMarker>]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    /// Check whether an invoker may run VIP commands.
    ///
    /// Fails closed: a missing member or an empty role intersection is
    /// never authorized.
    pub fn authorize(&self, member: Option<&Invoker>) -> bool {
        member.is_some_and(|member| self.is_vip_role(&member.roles))
    }
}
