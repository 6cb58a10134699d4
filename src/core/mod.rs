pub mod cli;
pub mod cmds;
pub mod controller;
pub mod engine;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod main_shared;
pub mod registry;
pub mod server;
pub mod types;
