//! 데이터 수집 모듈.

pub mod snapshot_collect;

pub use snapshot_collect::{collect_snapshot, collect_snapshot_at};
