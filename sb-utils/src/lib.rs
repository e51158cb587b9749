/// Audit trail collaborator for mutating actions.
pub mod audit;
/// Button and action-row builders.
pub mod components;
/// Generic embed builders shared across commands.
pub mod embed;
/// Invoking-member extraction from interactions.
pub mod interaction;
/// Pure parser helpers.
pub mod parse;
/// VIP role gate.
pub mod permissions;
/// Interaction response envelopes and fixed messages.
pub mod response;
