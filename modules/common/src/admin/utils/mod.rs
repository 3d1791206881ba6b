pub mod manager;

pub mod ownable;

pub mod pending_owner;
