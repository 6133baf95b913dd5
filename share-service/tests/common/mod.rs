use share_service::config::ShareConfig;
use share_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub storage_path: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let storage_path = format!("target/test-shares-{}", Uuid::new_v4());

        let mut config = ShareConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.storage.path = storage_path.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            storage_path,
        }
    }

    /// Cleanup test resources (the throwaway store directory).
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.storage_path).await;
    }
}
