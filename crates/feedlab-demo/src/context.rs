use crate::COMPONENT;
use crate::request::{DemoRequest, DemoResponse, node_ref, parse_request};
use feedlab_bst::IntBst;
use feedlab_error::{ErrorCategory, FeedlabError};
use feedlab_logging::Logger;
use feedlab_queue::LinkedQueue;
use feedlab_stack::LinkedStack;
use feedlab_tree::{AddChild, Attach, BinaryTree, GeneralTree, Side};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};

/// Every structure the demos operate on.
#[derive(Debug, Default)]
pub struct DemoState {
    pub queue: LinkedQueue<Value>,
    pub stack: LinkedStack<Value>,
    pub tree: GeneralTree<Value>,
    pub bt: BinaryTree<Value>,
    pub bst: IntBst,
}

impl DemoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack contents bottom to top, i.e. in push order.
    pub fn stack_bottom_up(&self) -> Vec<Value> {
        let mut items = self.stack.to_vec();
        items.reverse();
        items
    }
}

/// Process-wide owner of the demo state.
///
/// All operations go through one mutex, so concurrent callers see each
/// request applied as a whole.
#[derive(Debug, Default)]
pub struct DemoContext {
    state: Mutex<DemoState>,
    logger: Logger,
}

impl DemoContext {
    pub fn new(logger: Logger) -> Self {
        Self {
            state: Mutex::new(DemoState::new()),
            logger,
        }
    }

    /// Parse and apply one JSON request. Never fails: errors become 4xx/5xx
    /// responses.
    pub fn handle_json(&self, raw: &str) -> DemoResponse {
        match parse_request(raw) {
            Ok(request) => self.handle(request),
            Err(err) => {
                self.logger.warn(COMPONENT, err.message());
                DemoResponse::error(&err)
            }
        }
    }

    pub fn handle(&self, request: DemoRequest) -> DemoResponse {
        let op = request.op();
        let mut state = self.lock();
        match self.apply(&mut state, request) {
            Ok(response) => {
                self.logger.debug(COMPONENT, format!("{op} ok"));
                response
            }
            Err(err) => {
                self.logger
                    .warn(COMPONENT, format!("{op} rejected: {}", err.message()));
                DemoResponse::error(&err)
            }
        }
    }

    /// Run `f` against the current state, e.g. to inspect it in tests.
    pub fn with_state<R>(&self, f: impl FnOnce(&DemoState) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, DemoState> {
        // Every operation leaves the state consistent before it can panic.
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn apply(
        &self,
        state: &mut DemoState,
        request: DemoRequest,
    ) -> Result<DemoResponse, FeedlabError> {
        match request {
            DemoRequest::QueueEnqueue { value } => {
                state.queue.enqueue(value);
                snapshot("queue", &state.queue)
            }
            DemoRequest::QueueDequeue => {
                state.queue.dequeue();
                snapshot("queue", &state.queue)
            }
            DemoRequest::StackPush { value } => {
                state.stack.push(value);
                snapshot("stack", &state.stack_bottom_up())
            }
            DemoRequest::StackPop => {
                state.stack.pop();
                snapshot("stack", &state.stack_bottom_up())
            }
            DemoRequest::TreeAddRoot { value } => {
                let root = state.tree.add_root(value);
                snapshot("tree", root)
            }
            DemoRequest::TreeAddChild { target, value } => {
                let target = node_ref(&target);
                match state.tree.add_child(target, value) {
                    AddChild::Attached(id) => {
                        self.logger
                            .debug(COMPONENT, format!("tree: attached {id} under {target}"));
                    }
                    AddChild::TargetMissing => {
                        self.logger
                            .debug(COMPONENT, format!("tree: no node {target:?}"));
                    }
                    AddChild::DepthLimit => {
                        self.logger
                            .warn(COMPONENT, format!("tree: {target} is at the depth limit"));
                    }
                }
                snapshot("tree", &state.tree.root())
            }
            DemoRequest::BtAddLeft { parent, value } => {
                self.attach(state, Side::Left, node_ref(&parent), value);
                snapshot("bt", &state.bt.root())
            }
            DemoRequest::BtAddRight { parent, value } => {
                self.attach(state, Side::Right, node_ref(&parent), value);
                snapshot("bt", &state.bt.root())
            }
            DemoRequest::BtReset => {
                state.bt.reset();
                Ok(DemoResponse::reset())
            }
            DemoRequest::BstInsert { value } => {
                let (value, added) = state.bst.insert_raw(&value)?;
                if !added {
                    self.logger
                        .warn(COMPONENT, format!("bst: {value} is past the depth limit"));
                }
                snapshot("bst", &state.bst)
            }
            DemoRequest::BstReset => {
                state.bst.reset();
                Ok(DemoResponse::reset())
            }
        }
    }

    fn attach(&self, state: &mut DemoState, side: Side, parent: &str, value: Value) {
        let outcome = state.bt.add(side, parent, value);
        if !outcome.changed() {
            let reason = match outcome {
                Attach::SlotOccupied => "slot occupied",
                Attach::DepthLimit => "depth limit",
                _ => "no such parent",
            };
            self.logger
                .debug(COMPONENT, format!("bt: {side:?} of {parent:?} unchanged, {reason}"));
        }
    }
}

fn snapshot<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<DemoResponse, FeedlabError> {
    let body = serde_json::to_value(value).map_err(|err| {
        FeedlabError::with_source("serialize demo snapshot", ErrorCategory::Unknown, Box::new(err))
    })?;
    Ok(DemoResponse::snapshot(key, body))
}
