//! Cron jobs running alongside the gateway client.

pub mod rollup;
