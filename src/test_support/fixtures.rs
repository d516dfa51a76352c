pub mod activities;
pub mod state;
