//! # Mock Clients
//!
//! Two ways to test code that sits on top of a [`ResourceClient`] without a real actor:
//!
//! - [`MockClient`]: queue scripted replies up front, run the code under test, then
//!   [`verify`](MockClient::verify) that every reply was consumed in order.
//! - [`create_mock_client`] plus the `expect_*` helpers: receive the raw request,
//!   assert on its payload, and answer through its reply channel by hand.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, replies are scripted | real entity state |
//! | **Error injection** | `return_err` | needs the state that triggers it |
//! | **Use case** | client wrappers | entity hooks, full flows |

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

struct Script<T: ActorEntity> {
    expected: VecDeque<Expectation<T>>,
    unexpected: Vec<String>,
}

type SharedScript<T> = Arc<Mutex<Script<T>>>;

fn lock<T: ActorEntity>(script: &SharedScript<T>) -> MutexGuard<'_, Script<T>> {
    script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("Create({params:?})"),
        ResourceRequest::Get { id, .. } => format!("Get({id})"),
        ResourceRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
        ResourceRequest::Delete { id, .. } => format!("Delete({id})"),
    }
}

/// A scripted stand-in for a `ResourceActor<T>`.
///
/// ```ignore
/// let mut mock = MockClient::<OrderSession>::new();
/// mock.expect_create().return_ok(SessionId(1));
/// mock.expect_action(SessionId(1)).return_ok(SessionActionResult::Reset);
///
/// let client = SessionClient::new(mock.client());
/// // drive the client...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: SharedScript<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty script. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: SharedScript<T> = Arc::new(Mutex::new(Script {
            expected: VecDeque::new(),
            unexpected: Vec::new(),
        }));
        let worker_script = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = lock(&worker_script).expected.pop_front();
                let mismatch = match (request, next) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                        None
                    }
                    // Dropping the request drops its reply channel: the caller sees ActorDropped.
                    (request, _) => Some(describe(&request)),
                };
                if let Some(description) = mismatch {
                    lock(&worker_script).unexpected.push(description);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.script.clone(), |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.script.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.script.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.script.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Panics if a scripted reply was never requested or a request was not scripted.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", script.unexpected);
        }
        if !script.expected.is_empty() {
            panic!("Not all expectations were met. {} remaining", script.expected.len());
        }
    }
}

/// Finishes one expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    script: SharedScript<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        script: SharedScript<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            script,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        lock(&self.script).expected.push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        lock(&self.script).expected.push_back(expectation);
    }
}

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
