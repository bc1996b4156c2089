// Library crate for the bilingual site: shared by the server binary, the
// preview tool and the integration tests.

pub mod category;
pub mod config;
pub mod dom;
pub mod i18n;
pub mod notify;
pub mod page;
pub mod physicians;
pub mod preference;
pub mod resources;
pub mod server;
pub mod session;
pub mod site;
pub mod sync;
