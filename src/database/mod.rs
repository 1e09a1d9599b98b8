//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g.,
//! `database::characters::get_character_by_user_id`.

pub mod arcana;
pub mod characters;
pub mod init;
pub mod models;
pub mod users;
