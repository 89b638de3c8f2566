pub mod authorization;
pub mod health;
pub mod permissions;
pub mod resources;
pub mod roles;

#[cfg(test)]
mod tests;
