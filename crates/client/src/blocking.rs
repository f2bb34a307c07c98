//! Blocking adapter over async clients

use cloud_bindings_common::{BindingError, Result};
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Drives an async client to completion on a private runtime.
///
/// Every synchronous call goes through the same async code path, so both
/// flavors build identical parameter maps.
#[derive(Debug)]
pub struct Blocking<C> {
    inner: C,
    runtime: Runtime,
}

impl<C> Blocking<C> {
    pub fn new(inner: C) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| BindingError::Config(format!("Failed to start runtime: {}", e)))?;

        Ok(Self { inner, runtime })
    }

    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Run one async call and wait for its result.
    ///
    /// Must not be called from inside another tokio runtime.
    pub fn run<'a, F, Fut, T>(&'a self, call: F) -> T
    where
        F: FnOnce(&'a C) -> Fut,
        Fut: Future<Output = T> + 'a,
    {
        self.runtime.block_on(call(&self.inner))
    }
}
