//! Domain layer: payment entries, currency classes, money rules and the
//! persisted record shape, plus the ports the core expects collaborators to
//! implement.

pub mod currency;
pub mod money;
pub mod payment;
pub mod ports;
pub mod record;
