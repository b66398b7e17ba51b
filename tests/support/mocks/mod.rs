// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![cfg(test)]
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod time;
pub mod security;
pub mod repos;
pub mod util;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::{FixedClock, fixed_now};

// セキュリティ関連
pub use security::{PrefixTokenManager, StrictPasswordHasher, TEMPORARY_PASSWORD, token_for};

// リポジトリ関連
pub use repos::{InMemoryOrderRepo, InMemoryRecipientRepo, InMemoryUserRepo};

// 画像検証・通知・追跡コード
pub use util::{AcceptAllImages, CapturingDispatcher, SequentialTrackingCodes};
