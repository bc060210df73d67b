pub mod dismemberment;

pub use dismemberment::DismembermentPlugin;
