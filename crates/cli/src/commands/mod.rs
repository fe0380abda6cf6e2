mod check;
mod sync;

pub use check::CheckArgs;
pub use check::handle_check;
pub use sync::SyncArgs;
pub use sync::handle_sync;
