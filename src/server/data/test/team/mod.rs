use crate::server::{data::team::TeamRepository, model::team::CreateTeamParams};
use entity::{prelude::Team, team::Player};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::Number;
use test_utils::{builder::TestBuilder, factory};

mod append_player;
mod create;
mod delete;
mod get_all;
mod get_by_id;

fn player(first_name: &str, last_name: &str, salary: impl Into<Number>) -> Player {
    Player {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        salary: salary.into(),
    }
}
