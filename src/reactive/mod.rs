pub mod effect;
pub mod memo;
pub mod runtime;
pub mod signal;

pub use effect::{create_effect, Effect};
pub use memo::{create_memo, Memo};
pub use runtime::batch;
pub use signal::{create_signal, ReadSignal, Signal, WriteSignal};
