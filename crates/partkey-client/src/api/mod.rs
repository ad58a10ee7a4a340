//! API endpoint modules.

mod participation;
mod status;
mod transactions;

pub use participation::ParticipationApi;
pub use status::NodeApi;
pub use transactions::TransactionsApi;
