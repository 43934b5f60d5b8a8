//! Command-application errors.
//!
//! These never abort the tick loop: the engine logs each one, surfaces the
//! reportable ones as events, and keeps processing the remaining commands
//! and entities.

use thiserror::Error;

use crate::enums::WeaponCategory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no entity with id {0}")]
    UnknownEntity(u32),
    #[error("ownship cannot be deleted")]
    OwnshipDelete,
    #[error("ownship domain is fixed")]
    OwnshipDomainChange,
    #[error("scenario already has an ownship")]
    OwnshipExists,
    #[error("no roster variant matches category {0:?}")]
    NoMatchingVariant(WeaponCategory),
    #[error("magazine empty for category {0:?}")]
    MagazineEmpty(WeaponCategory),
    #[error("waypoint index {index} out of range for asset {asset_id}")]
    WaypointIndex { asset_id: u32, index: usize },
}
