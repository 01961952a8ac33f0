//! 时间源
//!
//! 过期时间依赖当前时间，测试中替换为固定时钟

use chrono::Utc;

pub trait Clock: Send + Sync {
    /// 当前时间（epoch 毫秒）
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
