/// Maven adapter running `dependency:tree` as a child process
mod maven_runner;

pub use maven_runner::{MavenRunner, MavenSettings};
