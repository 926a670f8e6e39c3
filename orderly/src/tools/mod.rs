pub mod demo;
pub mod traverse;
