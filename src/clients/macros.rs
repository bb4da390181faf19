/// Generate `FormClient` methods with the oneshot boilerplate and tracing.
///
/// Records are never logged: only the page name goes into the span.
macro_rules! form_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip_all, fields(page = self.page))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::FormError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::FormError::ActorCommunicationError("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::error::FormError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
