// Library entry so integration tests and external tools can reference internal modules.
// The Discord-facing bot binary lives in a separate crate and consumes this surface.
pub mod arcana;
pub mod character;
pub mod constants;
pub mod database;
pub mod model;
pub mod services;

// Convenient re-exports for frequently used types.
pub use arcana::catalog::ArcanaCatalog;
pub use arcana::gacha::{GachaDrawResult, GachaPicker};
pub use model::AppState;
