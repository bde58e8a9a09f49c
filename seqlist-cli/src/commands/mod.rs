pub mod demo;
pub mod run;
