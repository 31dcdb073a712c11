pub use self::project::*;

mod project;
