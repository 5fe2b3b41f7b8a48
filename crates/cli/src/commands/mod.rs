pub mod interactive;
pub mod lookup;
