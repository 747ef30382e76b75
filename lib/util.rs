mod build;

pub use build::*;
