pub mod home;

pub use home::ConsoleHome;
