pub mod assets;
pub mod embed_scripts;
pub mod leads;
pub mod prizes;

#[cfg(test)]
pub(crate) mod testing {
    use axum::body::{to_bytes, Body};
    use axum::http::Response;
    use axum::Router;
    use tokio::net::TcpListener;

    use crate::config::ServerConfig;
    use crate::AppState;

    pub fn config_with(pairs: &[(&str, &str)]) -> ServerConfig {
        let pairs: Vec<(String, String)> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())).unwrap()
    }

    pub fn app(pairs: &[(&str, &str)]) -> Router {
        crate::build_router(AppState::new(config_with(pairs)).unwrap())
    }

    /// Serves `router` on an ephemeral local port and returns its base URL.
    pub async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub async fn body_json(response: Response<Body>) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }
}
