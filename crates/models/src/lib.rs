pub mod errors;
pub mod validation;
pub mod db;
pub mod schema;
pub mod company;
pub mod invoice;

#[cfg(test)]
mod tests;
