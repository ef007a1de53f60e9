#![allow(non_snake_case, clippy::upper_case_acronyms)]

use std::fmt::Display;

use config_handler::Config;
use lazy_static::lazy_static;
use tracing::log;

pub mod api;
pub mod config_handler;
pub mod dashboard_service;
pub mod db;
pub mod matches_client;
pub mod migrate;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod report_client;
pub mod rest_client;
pub mod schedule_service;
pub mod team_lookup_service;
pub mod teams_client;
pub mod tournament_client;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
