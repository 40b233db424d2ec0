pub mod ecb_provider;

pub use ecb_provider::EcbProvider;
