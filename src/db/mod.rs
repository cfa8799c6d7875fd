pub mod invitations;
pub mod manuscripts;
pub mod postgres_service;
pub mod tasks;
pub mod teams;
pub mod users;
