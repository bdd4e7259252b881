/// Generates the lookup methods every resource-backed client shares.
/// With `batch`, also generates `get_<entity>s` for multi-id lookups.
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: u64) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }
            }
        }
    };
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident, batch) => {
        $crate::impl_client_methods!($client_name, $entity, $error, $entity_name_snake);
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake s>](&self, ids: Vec<u64>) -> Result<Vec<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get_many(ids).await.map_err(<$error>::from)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident $(, $batch:ident)?) => {
        $crate::impl_client_new!($client_name, $entity);
        $crate::impl_client_methods!($client_name, $entity, $error, $entity_name_snake $(, $batch)?);
    };
}

/// Generates a client method that sends one request variant and awaits its
/// oneshot response.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
