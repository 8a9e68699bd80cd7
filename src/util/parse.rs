use serenity::all::{ChannelId, RoleId};
use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Parses a stored channel id. Discord snowflakes are never zero, so zero is rejected too.
pub fn parse_channel_id(value: &str) -> Result<ChannelId, AppError> {
    parse_nonzero(value).map(ChannelId::from)
}

/// Parses a stored role id.
pub fn parse_role_id(value: &str) -> Result<RoleId, AppError> {
    parse_nonzero(value).map(RoleId::from)
}

fn parse_nonzero(value: &str) -> Result<NonZeroU64, AppError> {
    let result = value
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}
