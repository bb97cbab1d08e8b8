mod journey;
mod route;
mod stop;

pub use journey::*;
pub use route::*;
pub use stop::*;
