mod factory;

pub use factory::create_app;
