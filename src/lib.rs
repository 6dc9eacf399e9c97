//! Picolé na Praia Backend
//!
//! Layered architecture:
//! - domain: Picole entity, drafts and errors
//! - repository: Whole-list persistence (JSON file, in-memory)
//! - inventory: The in-memory list and its persisted mirror
//! - form / app: Form state and the submit/edit/delete flows
//! - commands: Handlers the mobile shell calls

use tokio::sync::Mutex;

pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod form;
pub mod inventory;
pub mod repository;

pub use app::PicoleApp;
pub use config::AppConfig;
pub use domain::{DomainError, DomainResult, Picole, PicoleDraft};
pub use inventory::Inventory;

use repository::{JsonFileRepository, ListRepository};

/// Application state shared across commands
pub struct AppState<R = JsonFileRepository> {
    pub app: Mutex<PicoleApp<R>>,
    pub config: AppConfig,
}

impl<R: ListRepository<Picole>> AppState<R> {
    /// State over an already built repository; nothing is loaded yet
    pub fn with_repository(repo: R, config: AppConfig) -> Self {
        Self {
            app: Mutex::new(PicoleApp::new(repo)),
            config,
        }
    }
}

impl AppState<JsonFileRepository> {
    /// Set up logging, open the inventory file and load it.
    ///
    /// Only a failure to create the app directories is fatal; a missing or
    /// unreadable inventory file starts the app empty.
    pub async fn init(config: AppConfig) -> Result<Self, String> {
        config
            .ensure_dirs()
            .map_err(|e| format!("Failed to create app dirs: {}", e))?;

        if let Err(e) = rolling_logger::init_logger(config.log_dir.clone(), &config.app_name) {
            log::warn!("Logging not initialized: {}", e);
        }

        let data_file = config.data_file();
        let mut app = PicoleApp::new(JsonFileRepository::new(&data_file));
        let loaded = app.start().await;
        let _ = rolling_logger::info(&format!(
            "Started with {} picoles from {}",
            loaded,
            data_file.display()
        ));

        Ok(Self {
            app: Mutex::new(app),
            config,
        })
    }
}
