use crate::server::{
    data::composer::ComposerRepository,
    model::composer::{CreateComposerParams, UpdateComposerParams},
};
use entity::prelude::Composer;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
