pub mod init;
pub mod outcomes;
pub mod payload;
pub mod print_config;
pub mod serve;
pub mod sites;

pub use init::execute_init;
pub use outcomes::execute_outcomes;
pub use payload::execute_payload;
pub use print_config::execute_print_config;
pub use serve::execute_serve;
pub use sites::execute_sites;
