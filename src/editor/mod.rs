use lsp_server::Connection;
use lsp_types::{
    InitializeParams, OneOf, ServerCapabilities, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tracing::{debug, info};

mod server;

use server::Encoding;

pub(crate) fn run_language_server() -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
    debug!("Starting Relevance Language Server");

    let (connection, threads) = Connection::stdio();

    // the position encoding depends on what the editor offers, so the
    // handshake is done in two halves around choosing it.
    let (id, params) = connection.initialize_start()?;
    let params = serde_json::from_value::<InitializeParams>(params)?;

    let encoding = Encoding::negotiate(
        params
            .capabilities
            .general
            .as_ref()
            .and_then(|general| {
                general
                    .position_encodings
                    .as_deref()
            }),
    );
    debug!(?encoding);

    let capabilities = ServerCapabilities {
        position_encoding: Some(encoding.kind()),
        text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
        document_formatting_provider: Some(OneOf::Left(true)),
        document_highlight_provider: Some(OneOf::Left(true)),
        ..Default::default()
    };

    connection.initialize_finish(
        id,
        serde_json::json!({
            "capabilities": capabilities,
            "serverInfo": {
                "name": "relevance",
                "version": env!("CARGO_PKG_VERSION"),
            },
        }),
    )?;

    if let Some(client) = params.client_info {
        info!("Relevance Language Server starting for {}", client.name);
    } else {
        info!("Relevance Language Server starting on stdin");
    }

    let server = server::RelevanceLanguageServer::new(encoding);
    server.run(connection)?;

    threads.join()?;
    Ok(())
}
