mod category;
mod dashboard;
mod project;
mod response;
mod upload;
mod user;
mod video;

pub use category::*;
pub use dashboard::*;
pub use project::*;
pub use response::*;
pub use upload::*;
pub use user::*;
pub use video::*;
