fn main() {
    stockroom_observability::init();

    let path = std::env::var("STOCKROOM_FILE")
        .unwrap_or_else(|_| stockroom_infra::DEFAULT_SNAPSHOT_PATH.to_string());
    let store = stockroom_infra::JsonSnapshotStore::new(&path);

    tracing::info!("running stockroom walkthrough against {path}");

    let mut stdout = std::io::stdout();
    if let Err(err) = stockroom_cli::demo::run(&store, &mut stdout) {
        tracing::error!("walkthrough failed: {err:#}");
    }
}
