pub mod to_hex;
pub mod txpool;
pub mod types;

use std::sync::Arc;

use jsonrpsee::RpcModule;

use crate::{cfg::EnabledApi, store::Store};

/// Construct the RPC module for a node, containing every enabled method.
pub fn rpc_module<S: Store + Send + Sync + 'static>(
    store: Arc<S>,
    enabled_apis: &[EnabledApi],
) -> RpcModule<Arc<S>> {
    let mut module = RpcModule::new(store.clone());

    module
        .merge(txpool::rpc_module(store, enabled_apis))
        .unwrap();

    module
}

/// Returns an `RpcModule<Arc<S>>`. Call with the following syntax:
/// ```ignore
/// declare_module!(
///     store,
///     enabled_apis,
///     [
///         ("method1", method_one),
///         ("method2", method_two),
///     ],
/// )
/// ```
///
/// where `store` is an `Arc<S>` for some `S: Store` and each implementation method has
/// the signature `Fn(jsonrpsee::types::Params, &Arc<S>) -> Result<T>`. Methods which
/// are not enabled by `enabled_apis` are not registered.
///
/// Will panic if any of the method names collide.
macro_rules! declare_module {
    (
        $store:expr,
        $enabled_apis:expr,
        [ $(($name:expr, $method:expr)),* $(,)? ] $(,)?
    ) => {{
        let mut module = jsonrpsee::RpcModule::new($store);
        let meter = opentelemetry::global::meter("");

        $(
            if $enabled_apis.iter().any(|e| e.enabled($name)) {
                let rpc_server_duration = meter
                    .f64_histogram("rpc.server.duration")
                    .with_unit("ms")
                    .build();
                module
                    .register_method($name, move |params, context, _| {
                        let mut attributes = vec![
                            opentelemetry::KeyValue::new("rpc.system", "jsonrpc"),
                            opentelemetry::KeyValue::new("rpc.service", "txpool"),
                            opentelemetry::KeyValue::new("rpc.method", $name),
                            opentelemetry::KeyValue::new("rpc.jsonrpc.version", "2.0"),
                        ];

                        let start = std::time::SystemTime::now();

                        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(
                            || $method(params, context),
                        ))
                        .unwrap_or_else(|_| {
                            Err(anyhow::anyhow!("Unhandled panic in RPC handler {}", $name))
                        });

                        let result = result.map_err(|e| {
                            // If the error is already an `ErrorObjectOwned`, we can just return that. Otherwise, wrap it
                            // with an `InternalError` code.
                            match e.downcast::<jsonrpsee::types::ErrorObjectOwned>() {
                                Ok(e) => e,
                                Err(e) => {
                                    tracing::error!(?e);
                                    jsonrpsee::types::ErrorObject::owned(
                                        jsonrpsee::types::error::ErrorCode::InternalError.code(),
                                        e.to_string(),
                                        None as Option<String>,
                                    )
                                }
                            }
                        });
                        if let Err(err) = &result {
                            attributes.push(opentelemetry::KeyValue::new(
                                "rpc.jsonrpc.error_code",
                                err.code() as i64,
                            ));
                        }
                        rpc_server_duration.record(
                            start.elapsed().map_or(0.0, |d| d.as_secs_f64() * 1000.0),
                            &attributes,
                        );
                        result
                    })
                    .unwrap();
            }
        )*

        module
    }}
}

use declare_module;
