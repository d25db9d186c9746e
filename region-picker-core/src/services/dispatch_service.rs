//! 查询任务调度
//!
//! 每个层级同一时间最多一个在途任务：新请求会中止同层级的旧任务。
//! 完成结果经 mpsc channel 交回 UI 事件循环，由票据决定是否采用。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use region_picker_provider::HierarchyLevel;

use crate::services::OptionFetcher;
use crate::types::{FetchCompletion, FetchRequest};

/// Spawns fetches on a tokio runtime and reports completions over a channel.
pub struct FetchDispatcher {
    fetcher: Arc<OptionFetcher>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<FetchCompletion>,
    in_flight: HashMap<HierarchyLevel, JoinHandle<()>>,
}

impl FetchDispatcher {
    /// Create a dispatcher on `runtime` and the receiving end of its completions.
    pub fn new(
        fetcher: Arc<OptionFetcher>,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<FetchCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                fetcher,
                runtime,
                tx,
                in_flight: HashMap::new(),
            },
            rx,
        )
    }

    /// Spawn `request`, aborting any in-flight fetch of the same level.
    pub fn dispatch(&mut self, request: FetchRequest) {
        let level = request.level;
        self.cancel(level);

        log::debug!(
            "[dispatch] {level} #{} {:?} parent={:?}",
            request.ticket,
            request.query,
            request.parent_id
        );

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            let result = fetcher.fetch(&request).await;
            // 接收端关闭说明 UI 已退出
            let _ = tx.send(FetchCompletion {
                level: request.level,
                ticket: request.ticket,
                result,
            });
        });
        self.in_flight.insert(level, handle);
    }

    /// Dispatch every request of one form tick.
    pub fn dispatch_all(&mut self, requests: Vec<FetchRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }

    /// Abort the in-flight fetch of `level`. Returns whether one was running.
    pub fn cancel(&mut self, level: HierarchyLevel) -> bool {
        match self.in_flight.remove(&level) {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                log::debug!("[dispatch] {level} superseded fetch aborted");
                true
            }
            _ => false,
        }
    }

    /// Abort the in-flight fetches of every level below `level`.
    pub fn cancel_descendants(&mut self, level: HierarchyLevel) {
        for descendant in level.descendants() {
            self.cancel(*descendant);
        }
    }

    pub fn cancel_all(&mut self) {
        for level in HierarchyLevel::ALL {
            self.cancel(level);
        }
    }

    /// Number of fetch tasks still running.
    pub fn in_flight(&self) -> usize {
        self.in_flight
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Drop for FetchDispatcher {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
