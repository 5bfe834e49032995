pub mod page;
pub mod submitter;
pub mod traits;
pub mod validation;
pub mod validity;

#[cfg(test)]
pub(crate) mod testing;
