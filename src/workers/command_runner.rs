use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::category::Category;
use crate::enums::commands::Commands;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::logger::progress_logger::ProgressLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::dashboard::Dashboard;
use crate::services::sources;
use crate::services::sources::directory_source::DirectoryAggregateSource;
use crate::structs::category_panel::CategoryPanel;
use crate::structs::chart::chart_surface::ChartSurface;
use crate::structs::config::config::Config;
use crate::traits::aggregate_source::AggregateSource;
use crate::ui::dashboard_server::DashboardServer;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> RoleboardResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Categories => self.categories_command(),
            Commands::Report { category, json, surface_height, from_dir } => {
                self.report_command(category, json, surface_height, from_dir).await
            }
            Commands::Serve { port, open } => self.serve_command(port, open).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn load_config(&self) -> RoleboardResult<Config> {
        let config = ConfigManager::load(self.config_path()).map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'roleboard init' to create a configuration file.");
            e
        })?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(RoleboardError::config_error(
                &format!("{} configuration problems", errors.len()),
                None,
                Some("Run 'roleboard validate' for details"),
            ));
        }

        Ok(config)
    }

    fn init_command(&self) -> RoleboardResult<()> {
        log::info!("🚀 Initializing roleboard configuration...");

        let path = ConfigManager::create_sample_config(self.config_path())?;
        log::info!("📝 Edit {} to point at your statistics endpoints.", path.display());
        log::info!("🔧 Run 'roleboard validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> RoleboardResult<()> {
        let config = ConfigManager::load(self.config_path())?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    log::error!("  {}. {}", i + 1, error);
                }
                Err(RoleboardError::config_error(
                    &format!("{} configuration problems", errors.len()),
                    None,
                    None,
                ))
            }
        }
    }

    fn categories_command(&self) -> RoleboardResult<()> {
        let config = self.load_config()?;
        let dashboard = Dashboard::from_config(&config)?;

        println!("\n🏷️ Categories");
        for category in Category::ALL {
            let Some(pipeline) = dashboard.pipeline(category) else {
                continue;
            };
            let limit = pipeline
                .options
                .limit
                .map_or_else(|| "all".to_string(), |n| format!("top {}", n));
            println!(
                "  {:<26} {:<8} {:<34} {}{}",
                category.slug(),
                category.title(),
                config.endpoint_for(category),
                limit,
                if pipeline.word_cloud { " + word cloud" } else { "" }
            );
        }
        Ok(())
    }

    async fn report_command(
        &self,
        category: Option<String>,
        json: bool,
        surface_height: Option<u32>,
        from_dir: Option<PathBuf>,
    ) -> RoleboardResult<()> {
        let config = self.load_config()?;
        let dashboard = Dashboard::from_config(&config)?;
        let source: Arc<dyn AggregateSource> = match from_dir {
            Some(dir) => Arc::new(DirectoryAggregateSource::new(dir)),
            None => sources::from_config(&config)?,
        };

        let selected = match category {
            Some(name) => vec![name.parse::<Category>()?],
            None => dashboard.categories(),
        };

        if let Some(height) = surface_height {
            for category in &selected {
                dashboard.surface_ready(*category, &ChartSurface::mounted(height))?;
            }
        }

        let mut progress = ProgressLogger::new("📥 Fetching statistics".to_string(), selected.len());
        if !json {
            progress.start();
        }

        let errors: Vec<RoleboardError> = if selected.len() == dashboard.categories().len() {
            dashboard
                .refresh_with(source.as_ref(), |_| progress.tick())
                .await
                .into_iter()
                .filter_map(|o| o.result.err())
                .collect()
        } else {
            let mut errors = Vec::new();
            for category in &selected {
                if let Err(e) = dashboard.refresh_category(*category, source.as_ref()).await {
                    errors.push(e);
                }
                progress.tick();
            }
            errors
        };
        let failures = errors.len();

        if !json {
            let done = format!("Fetched {}/{} categories", progress.completed() - failures, selected.len());
            if failures == selected.len() {
                progress.error(&done).await;
            } else {
                progress.stop(&done).await;
            }
        }

        let panels: Vec<CategoryPanel> = selected
            .iter()
            .filter_map(|category| dashboard.panel(*category))
            .collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&panels).map_err(|e| {
                RoleboardError::system_error("serializing panels", &e.to_string())
            })?);
        } else {
            ReportPrinter::print_report(&panels);
        }

        match RoleboardError::from_failures(errors, "report") {
            Some(error) if failures == selected.len() || !error.is_recoverable() => Err(error),
            Some(error) => {
                log::warn!("{} {}", error.severity().emoji(), error.user_message());
                Ok(())
            }
            None => Ok(()),
        }
    }

    async fn serve_command(&self, port: u16, open: bool) -> RoleboardResult<()> {
        let config = self.load_config()?;
        let dashboard = Arc::new(Dashboard::from_config(&config)?);
        let source = sources::from_config(&config)?;

        let mut server = DashboardServer::new(dashboard, source);
        let addr = server.start(port).await?;

        let url = format!("http://{}/api/dashboard", addr);
        log::info!("📊 Dashboard data at {}", url);
        if open {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        log::info!("Press Ctrl-C to stop");
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| RoleboardError::system_error("waiting for Ctrl-C", &e.to_string()))?;

        server.shutdown().await
    }
}
