pub mod administrator;
pub mod registry;
pub mod walkthrough;

#[cfg(test)]
mod tests;
