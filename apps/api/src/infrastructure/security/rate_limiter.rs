use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use redis::{AsyncCommands, Client};
use std::sync::Arc;
use tracing::warn;

/// Fixed-window hit counter.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Counts one hit on `key` and returns the count so far in the current
    /// window together with the seconds left until the window resets.
    async fn hit(&self, key: &str, window_seconds: u64) -> anyhow::Result<(u32, u64)>;
}

/// Counter primitives a fixed window is built from.
#[async_trait]
pub trait WindowCounter: Send + Sync {
    /// Increments `key` and reads its TTL in one atomic step. A negative TTL
    /// means the key carries no expiry.
    async fn incr_and_ttl(&self, key: &str) -> anyhow::Result<(u32, i64)>;
    async fn expire(&self, key: &str, seconds: u64) -> anyhow::Result<()>;
}

pub struct RedisWindowCounter {
    client: Client,
}

impl RedisWindowCounter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WindowCounter for RedisWindowCounter {
    async fn incr_and_ttl(&self, key: &str) -> anyhow::Result<(u32, i64)> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let (count, ttl): (u32, i64) = redis::pipe()
            .atomic()
            .incr(key, 1_u32)
            .ttl(key)
            .query_async(&mut conn)
            .await?;
        Ok((count, ttl))
    }

    async fn expire(&self, key: &str, seconds: u64) -> anyhow::Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.expire(key, seconds as i64).await?;
        Ok(())
    }
}

/// Keys are `rl:{key}`. A window opens on the first hit of a key without an
/// expiry, so a lost `EXPIRE` is repaired on the next hit.
pub struct FixedWindowStore<C> {
    counter: C,
}

impl<C: WindowCounter> FixedWindowStore<C> {
    pub fn new(counter: C) -> Self {
        Self { counter }
    }
}

#[async_trait]
impl<C: WindowCounter> RateLimitStore for FixedWindowStore<C> {
    async fn hit(&self, key: &str, window_seconds: u64) -> anyhow::Result<(u32, u64)> {
        let k = format!("rl:{}", key);
        let (count, ttl) = self.counter.incr_and_ttl(&k).await?;
        if ttl >= 0 {
            return Ok((count, ttl.unsigned_abs()));
        }
        self.counter.expire(&k, window_seconds).await?;
        Ok((count, window_seconds))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_after_seconds: u64,
    pub reset_at: DateTime<Utc>,
}

pub struct RateLimiter {
    store: Arc<dyn RateLimitStore>,
    max_requests: u32,
    window_seconds: u64,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn RateLimitStore>, max_requests: u32, window_seconds: u64) -> Self {
        Self {
            store,
            max_requests,
            window_seconds,
        }
    }

    pub fn enabled(&self) -> bool {
        self.max_requests > 0
    }

    /// `None` when limiting is disabled or the store is unreachable; callers
    /// let the request through in both cases.
    pub async fn check(&self, key: &str) -> Option<RateLimitDecision> {
        if !self.enabled() {
            return None;
        }
        match self.store.hit(key, self.window_seconds).await {
            Ok((count, reset_after_seconds)) => Some(RateLimitDecision {
                allowed: count <= self.max_requests,
                limit: self.max_requests,
                remaining: self.max_requests.saturating_sub(count),
                reset_after_seconds,
                reset_at: Utc::now() + Duration::seconds(reset_after_seconds as i64),
            }),
            Err(e) => {
                warn!("Rate limit store unavailable, allowing request: {}", e);
                None
            }
        }
    }
}
