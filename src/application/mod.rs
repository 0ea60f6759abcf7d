// Application services orchestrating the domain
pub mod launch;
pub mod trading;
