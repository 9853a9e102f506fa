/// TCP accept loop around a shared MockIndexer

use std::path::Path;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;
use txwatch::test_utils::{serve, MockIndexer};
use txwatch::transport::TcpTransport;
use txwatch::{AddressVersions, TxStore};

/// Build an indexer from a store snapshot file, or an empty one
pub fn load_indexer(
    snapshot: Option<&Path>,
    versions: AddressVersions,
    height: Option<u32>,
) -> anyhow::Result<MockIndexer> {
    let mut indexer = match snapshot {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            let store = TxStore::load(&bytes, versions)?;
            log::info!("Seeded {} transactions from {:?}", store.len(), path);
            MockIndexer::from_store(&store)
        }
        None => MockIndexer::new(versions),
    };
    if let Some(height) = height {
        indexer.set_height(height);
    }
    Ok(indexer)
}

pub async fn run_server(indexer: MockIndexer, host: String, port: u16) -> anyhow::Result<()> {
    let indexer = Arc::new(Mutex::new(indexer));

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    log::info!("Indexer mock listening on tcp://{}", addr);

    loop {
        let (stream, peer) = listener.accept().await?;
        log::info!("Client connected from {}", peer);
        stream.set_nodelay(true)?;
        let indexer = indexer.clone();
        tokio::spawn(async move {
            serve(TcpTransport::new(stream), indexer).await;
            log::info!("Client {} disconnected", peer);
        });
    }
}
