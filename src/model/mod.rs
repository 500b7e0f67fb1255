pub mod cost;
pub mod discretizer;
pub mod mdp;
pub mod transition;
