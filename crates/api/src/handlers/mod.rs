pub mod villains;
