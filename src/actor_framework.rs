use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
///
/// Ids must be `Ord` so the store iterates in id order, which for sequential
/// ids is also insertion order.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Update: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// Apply a partial update. Runs against a draft copy; the stored record is
    /// only replaced when this returns `Ok`.
    fn on_update(&mut self, update: Self::Update) -> Result<(), String>;

    /// Whether the entity shows up in `List` responses.
    fn is_listed(&self) -> bool {
        true
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Errors surfaced by the generic actor and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

/// Builds an id generator that yields 1, 2, 3, ...
///
/// The counter is shared, so the closure can be handed to an actor while the
/// generator stays monotonic for the lifetime of the process.
pub fn sequential_ids() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = ids.iter().filter_map(|id| self.store.get(id).cloned()).collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.store.values().filter(|item| item.is_listed()).cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, update));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!("ResourceActor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        debug!(id = %id, "Stored new item");
        self.store.insert(id, item.clone());
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let Some(item) = self.store.get_mut(&id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let mut draft = item.clone();
        draft.on_update(update).map_err(FrameworkError::Rejected)?;
        *item = draft;
        Ok(item.clone())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
