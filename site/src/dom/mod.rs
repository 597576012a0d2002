//! Browser binding: the `web_sys` view, `setTimeout` scheduling and the
//! event wiring that drives the controllers.

mod bind;
mod scheduler;
mod view;

pub use bind::{install, load_config};
pub use scheduler::GlooScheduler;
pub use view::DomView;
