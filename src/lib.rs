//! Voucher AI CLI: 같은 백엔드를 터미널에서 다루는 클라이언트

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod notifier;
pub mod scanner;
