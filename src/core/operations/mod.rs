//! Token operations by purpose.
//!
//! [`local`] implements symmetric authenticated encryption; [`public`]
//! implements asymmetric signing. Functions here take raw key material
//! plus the full token header and are wired through
//! [`Version`](crate::core::version::Version).

pub(crate) mod local;
pub(crate) mod public;
