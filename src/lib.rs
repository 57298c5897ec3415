pub mod compiler;
pub mod nl;
pub mod pddl;
pub mod server;
pub mod shell;
