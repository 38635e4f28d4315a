mod mentee;
mod mentor;
mod message;
mod notification;
mod record;
mod user;
