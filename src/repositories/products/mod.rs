//! 카탈로그와 재고 데이터 액세스 계약

pub mod product_repo;
pub mod stock_ledger;

pub use product_repo::{CategoryRepository, ProductRepository};
pub use stock_ledger::StockLedger;
