pub mod error;
pub mod graphics;
pub mod history;
pub mod scene;
