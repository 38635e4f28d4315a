use crate::server::model::user::User;

mod auth;
mod dashboard;
mod import;
mod mentee;
mod mentor;
mod message;
mod notification;

/// Converts a factory-created user row into the domain user the services expect.
fn domain_user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
