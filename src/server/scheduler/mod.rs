//! Cron jobs run alongside the HTTP server.

pub mod at_risk;
