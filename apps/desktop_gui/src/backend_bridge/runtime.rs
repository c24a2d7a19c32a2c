//! Tokio runtime that drives reveal timers and contact submissions while
//! egui owns the main thread.

use anyhow::Context;
use tokio::runtime::{Builder, Handle, Runtime};

pub struct BackendRuntime {
    runtime: Runtime,
}

impl BackendRuntime {
    pub fn start() -> anyhow::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("landing-backend")
            .enable_all()
            .build()
            .context("failed to build backend runtime")?;
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }
}
