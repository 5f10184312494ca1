use crate::server::{data::person::PersonRepository, model::person::CreatePersonParams};
use entity::{
    person::{Dependent, Role},
    prelude::Person,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
