pub mod config;
pub mod credit;
pub mod customer;
pub mod system;

use crate::cli::registry::CommandRegistry;

/// Every shell command, listed resources first and shell controls last.
pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::from_entries(
        customer::definitions()
            .into_iter()
            .chain(credit::definitions())
            .chain(config::definitions())
            .chain(system::definitions()),
    )
}
