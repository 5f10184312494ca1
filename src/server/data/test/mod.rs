mod composer;
mod customer;
mod person;
mod team;
mod user;
