/// Player transport and status commands.
pub mod player;
