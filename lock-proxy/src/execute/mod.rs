//! Operation handlers for the lock proxy.
//!
//! Every handler validates before it mutates and returns the notification
//! event for a successful run. `LockProxy` turns the result into the boolean
//! outcome.
//! - `registration` - delegateAsset and registerAsset
//! - `transfer` - lock, unlock and getAssetBalance
//! - `admin` - operator-only directory binding

mod admin;
mod registration;
mod transfer;

pub use admin::*;
pub use registration::*;
pub use transfer::*;
