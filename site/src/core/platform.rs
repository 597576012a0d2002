//! Platform detection helpers.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Run a future without awaiting it. On the web this queues it on the
/// browser's microtask loop; natively it completes before returning.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        futures::executor::block_on(future);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn native_platform_outside_wasm() {
        assert_eq!(Platform::current(), Platform::Native);
    }

    #[test]
    fn spawned_future_completes_natively() {
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();
        spawn_future(async move { flag.set(true) });
        assert!(done.get());
    }
}
