//! Construction-time error types.
//!
//! The engine has exactly one fatal error class: invalid configuration.
//! Everything that can go wrong during play (overshooting square 100,
//! querying the die before the first roll) is a normal, documented outcome
//! and is signaled through return values, never through this type.

use crate::board::Square;

/// Errors raised while building a [`Die`](crate::Die), [`Board`](crate::Board),
/// or [`Game`](crate::Game) from configuration.
///
/// All variants are fatal for the object under construction: a failed
/// constructor never yields a usable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Die constructed with zero faces.
    InvalidDieFaces,
    /// A link source or destination lies outside `1..=100`.
    LinkOutOfRange(Square),
    /// A link whose source equals its destination (neither drop nor climb).
    SelfLink(Square),
    /// Two links share the same source square.
    DuplicateLinkSource(Square),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDieFaces => {
                write!(f, "die must have at least one face")
            }
            ConfigError::LinkOutOfRange(square) => {
                write!(f, "link endpoint {square} is outside the board")
            }
            ConfigError::SelfLink(square) => {
                write!(f, "link at {square} points to its own source")
            }
            ConfigError::DuplicateLinkSource(square) => {
                write!(f, "square {square} has more than one outgoing link")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
