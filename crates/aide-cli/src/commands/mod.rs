pub mod exec;
pub mod repl;
