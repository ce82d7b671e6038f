//! Builds the condition tracker and its stores for front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use tracker_content::{ContentFactory, MarkerCatalog, MarkerSet, MarkerSetLoader, TokenMarkerLoader};
use tracker_core::TrackerConfig;
use tracker_runtime::{
    ConditionTracker, FileLedgerRepository, FileTurnOrderRepository, InMemoryLedgerRepo,
    InMemoryTurnOrderRepo, LedgerRepository, MarkerGateway, Notifier, Roster, TurnOrderRepository,
};

use crate::config::CliConfig;

/// Builder that assembles content, storage and the tracker for clients.
pub struct TrackerSetupBuilder {
    config: CliConfig,
    markers: Arc<dyn MarkerGateway>,
    notifier: Arc<dyn Notifier>,
    roster: Arc<dyn Roster>,
}

impl TrackerSetupBuilder {
    /// The host gateways are supplied by the front-end.
    pub fn new(
        config: CliConfig,
        markers: Arc<dyn MarkerGateway>,
        notifier: Arc<dyn Notifier>,
        roster: Arc<dyn Roster>,
    ) -> Self {
        Self {
            config,
            markers,
            notifier,
            roster,
        }
    }

    pub fn build(self) -> Result<TrackerSetup> {
        let (tracker_config, catalog) = load_content(&self.config)?;

        let (turn_order, ledger): (Arc<dyn TurnOrderRepository>, Arc<dyn LedgerRepository>) =
            if self.config.enable_persistence {
                let dir = self.config.resolved_state_dir();
                tracing::info!(dir = %dir.display(), "persisting tracker state");
                (
                    Arc::new(FileTurnOrderRepository::new(&dir)?),
                    Arc::new(FileLedgerRepository::new(&dir)?),
                )
            } else {
                (
                    Arc::new(InMemoryTurnOrderRepo::new()),
                    Arc::new(InMemoryLedgerRepo::new()),
                )
            };

        let tracker = ConditionTracker::builder()
            .config(tracker_config)
            .catalog(catalog)
            .turn_order(turn_order.clone())
            .ledger(ledger)
            .markers(self.markers)
            .notifier(self.notifier)
            .roster(self.roster)
            .build()?;

        Ok(TrackerSetup {
            config: self.config,
            turn_order,
            tracker,
        })
    }
}

pub struct TrackerSetup {
    pub config: CliConfig,
    /// Turn order store shared between the host and the tracker.
    pub turn_order: Arc<dyn TurnOrderRepository>,
    pub tracker: ConditionTracker,
}

/// Tracker config and marker catalog from the configured files.
fn load_content(config: &CliConfig) -> Result<(TrackerConfig, MarkerCatalog)> {
    let factory = config.content_dir.as_ref().map(ContentFactory::new);

    let tracker_config = match &factory {
        Some(factory) => factory.load_config()?,
        None => TrackerConfig::default(),
    };

    let set = match (&config.marker_set, &factory) {
        (Some(path), _) => MarkerSetLoader::load(path)
            .with_context(|| format!("loading marker set {}", path.display()))?,
        (None, Some(factory)) => factory.load_marker_set()?,
        (None, None) => MarkerSet::default(),
    };

    let library = match (&config.token_markers, &factory) {
        (Some(path), _) => Some(
            TokenMarkerLoader::load(path)
                .with_context(|| format!("loading token markers {}", path.display()))?,
        ),
        (None, Some(factory)) => factory.load_token_markers()?,
        (None, None) => None,
    };

    tracing::info!(set = %set.name, host_library = library.is_some(), "marker catalog loaded");

    let catalog = match library {
        Some(library) => MarkerCatalog::new(set, library),
        None => MarkerCatalog::standalone(set),
    };
    Ok((tracker_config, catalog))
}

#[cfg(test)]
mod tests {
    use tracker_core::ConditionKind;
    use tracker_runtime::{InMemoryMarkers, InMemoryRoster, RecordingNotifier};

    use super::*;

    fn builder(config: CliConfig) -> TrackerSetupBuilder {
        TrackerSetupBuilder::new(
            config,
            Arc::new(InMemoryMarkers::new()),
            Arc::new(RecordingNotifier::new()),
            Arc::new(InMemoryRoster::new()),
        )
    }

    #[test]
    fn defaults_run_in_memory_with_built_in_markers() {
        let setup = builder(CliConfig::default()).build().unwrap();

        assert!(setup.turn_order.read().unwrap().is_empty());
        assert_eq!(
            setup
                .tracker
                .catalog()
                .tag_for(ConditionKind::Bleed)
                .unwrap()
                .as_str(),
            "path-condition-bleeding"
        );
    }

    #[test]
    fn persistence_writes_into_the_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            enable_persistence: true,
            state_dir: Some(dir.path().to_path_buf()),
            ..CliConfig::default()
        };

        let setup = builder(config).build().unwrap();
        setup.tracker.init().unwrap();
        setup.tracker.open_initiative().unwrap();

        assert!(dir.path().join("conditions.json").exists());
        assert!(dir.path().join("turn_order.json").exists());
    }

    #[test]
    fn marker_set_file_overrides_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house.toml");
        std::fs::write(
            &path,
            "name = \"house\"\n[markers]\nshaken = \"skull\"\n",
        )
        .unwrap();

        let config = CliConfig {
            marker_set: Some(path),
            ..CliConfig::default()
        };
        let setup = builder(config).build().unwrap();

        let catalog = setup.tracker.catalog();
        assert_eq!(
            catalog.tag_for(ConditionKind::Shaken).unwrap().as_str(),
            "skull"
        );
        assert!(catalog.tag_for(ConditionKind::Prone).is_err());
    }

    #[test]
    fn unreadable_marker_set_is_an_error() {
        let config = CliConfig {
            marker_set: Some("/nonexistent/markers.toml".into()),
            ..CliConfig::default()
        };
        assert!(builder(config).build().is_err());
    }
}
