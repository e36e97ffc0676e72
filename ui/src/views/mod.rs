mod home;
pub use home::Home;

mod graveyard;
pub use graveyard::Graveyard;
