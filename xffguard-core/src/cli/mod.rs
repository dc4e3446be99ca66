pub mod conf;
pub mod rewrite;
#[cfg(test)]
mod tests;
