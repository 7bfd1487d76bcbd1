#![allow(dead_code)]

mod builders;
mod mock_sink;
mod recorder;

pub use builders::*;
pub use mock_sink::*;
pub use recorder::*;
