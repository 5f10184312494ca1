use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::prelude::User;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_user_name;
