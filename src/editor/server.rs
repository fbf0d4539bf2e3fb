use std::collections::HashMap;
use std::error::Error;

use lsp_server::{Connection, ErrorCode, Message, Notification, Request, RequestId, Response};
use lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, DocumentFormattingParams, DocumentHighlight,
    DocumentHighlightKind, DocumentHighlightParams, Position, PositionEncodingKind, Range,
    TextEdit, Uri,
};
use relevance::analysis;
use relevance::formatting;
use relevance::language::{Class, Highlight};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_value, Value};
use tracing::{debug, error, info, warn};

use crate::problem::{calculate_column_number, calculate_line_number, calculate_offset};

type Failure = Box<dyn Error + Sync + Send>;

/// How the columns of LSP positions are counted. The protocol default is
/// UTF-16 code units; clients may offer to count whole characters instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf16,
    Utf32,
}

impl Encoding {
    /// Pick the encoding to use from those a client says it supports.
    pub fn negotiate(offered: Option<&[PositionEncodingKind]>) -> Encoding {
        match offered {
            Some(kinds) if kinds.contains(&PositionEncodingKind::UTF32) => Encoding::Utf32,
            _ => Encoding::Utf16,
        }
    }

    pub fn kind(&self) -> PositionEncodingKind {
        match self {
            Encoding::Utf16 => PositionEncodingKind::UTF16,
            Encoding::Utf32 => PositionEncodingKind::UTF32,
        }
    }

    /// Width of one character in column units.
    fn units(&self, c: char) -> usize {
        match self {
            Encoding::Utf16 => c.len_utf16(),
            Encoding::Utf32 => 1,
        }
    }
}

pub struct RelevanceLanguageServer {
    /// Open documents, by URI, as last sent by the editor
    documents: HashMap<Uri, String>,
    encoding: Encoding,
}

impl RelevanceLanguageServer {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            documents: HashMap::new(),
            encoding,
        }
    }

    /// Serve requests until the editor sends `exit` or closes the channel.
    pub fn run(mut self, connection: Connection) -> Result<(), Failure> {
        info!("Serving relevance documents");

        for message in &connection.receiver {
            match message {
                Message::Request(request) => {
                    let response = self.handle_request(request);
                    connection
                        .sender
                        .send(Message::Response(response))?;
                }
                Message::Notification(notification) if notification.method == "exit" => break,
                Message::Notification(notification) => {
                    let method = notification
                        .method
                        .clone();
                    if let Err(problem) = self.handle_notification(notification) {
                        error!("Notification {} failed: {}", method, problem);
                    }
                }
                Message::Response(response) => {
                    warn!("Ignoring response {:?} sent to the server", response.id);
                }
            }
        }

        Ok(())
    }

    /// Work out the response to one request. Every request gets one, even
    /// when its parameters are malformed or the document is unknown.
    fn handle_request(&mut self, request: Request) -> Response {
        let Request { id, method, params } = request;

        match method.as_str() {
            "textDocument/formatting" => {
                let result = parse::<DocumentFormattingParams>(params)
                    .and_then(|params| self.handle_document_formatting(params));
                reply(id, &method, result)
            }
            "textDocument/documentHighlight" => {
                let result = parse::<DocumentHighlightParams>(params)
                    .and_then(|params| self.handle_document_highlight(params));
                reply(id, &method, result)
            }
            "shutdown" => {
                info!("Shutting down");
                Response::new_ok(id, Value::Null)
            }
            _ => {
                warn!("Unsupported request {}", method);
                Response::new_err(
                    id,
                    ErrorCode::MethodNotFound as i32,
                    format!("Unsupported method: {}", method),
                )
            }
        }
    }

    fn handle_notification(&mut self, notification: Notification) -> Result<(), Failure> {
        let Notification { method, params } = notification;

        match method.as_str() {
            "textDocument/didOpen" => {
                let params: DidOpenTextDocumentParams = from_value(params)?;
                let document = params.text_document;
                self.store(document.uri, document.text);
            }
            "textDocument/didChange" => {
                let params: DidChangeTextDocumentParams = from_value(params)?;

                // full sync, so the last change carries the whole document
                if let Some(change) = params
                    .content_changes
                    .into_iter()
                    .last()
                {
                    self.store(params.text_document.uri, change.text);
                }
            }
            "textDocument/didSave" => {
                let params: DidSaveTextDocumentParams = from_value(params)?;
                if let Some(text) = params.text {
                    self.store(params.text_document.uri, text);
                }
            }
            "textDocument/didClose" => {
                let params: DidCloseTextDocumentParams = from_value(params)?;
                let uri = params.text_document.uri;
                debug!("Forgetting {:?}", uri);
                self.documents
                    .remove(&uri);
            }
            _ => {
                debug!("Ignoring notification {}", method);
            }
        }
        Ok(())
    }

    fn store(&mut self, uri: Uri, text: String) {
        debug!("Holding {:?}, {} bytes", uri, text.len());
        self.documents
            .insert(uri, text);
    }

    fn handle_document_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> Result<Option<Vec<TextEdit>>, Failure> {
        let uri = params
            .text_document
            .uri;

        let content = self
            .documents
            .get(&uri)
            .ok_or("Document not open")?;

        let result = formatting::reformat(content);
        debug!("Reformatted {:?}", uri);
        if result == *content {
            return Ok(None);
        }

        // the whole document is replaced in one edit
        let whole = Range::new(
            Position::new(0, 0),
            offset_to_position(
                content,
                content
                    .chars()
                    .count(),
                self.encoding,
            ),
        );

        Ok(Some(vec![TextEdit::new(whole, result)]))
    }

    fn handle_document_highlight(
        &self,
        params: DocumentHighlightParams,
    ) -> Result<Option<Vec<DocumentHighlight>>, Failure> {
        let position = params.text_document_position_params;
        let uri = position
            .text_document
            .uri;

        let content = match self
            .documents
            .get(&uri)
        {
            Some(content) => content,
            None => return Ok(None),
        };

        let offset = position_to_offset(content, position.position, self.encoding);
        debug!("Highlight request: {:?} at {}", uri, offset);

        let highlights = analysis::analyze_at(content, offset);
        if highlights.is_empty() {
            return Ok(None);
        }

        Ok(Some(convert_highlights(content, &highlights, self.encoding)))
    }
}

fn parse<T: DeserializeOwned>(params: Value) -> Result<T, Failure> {
    Ok(from_value(params)?)
}

/// Turn the outcome of a handler into the response for request `id`. Both
/// ways a request can fail (parameters that do not parse, a document that
/// is not open) are the client's parameters being wrong.
fn reply<T: Serialize>(id: RequestId, method: &str, result: Result<T, Failure>) -> Response {
    match result {
        Ok(value) => Response::new_ok(id, value),
        Err(problem) => {
            error!("Request {} failed: {}", method, problem);
            Response::new_err(id, ErrorCode::InvalidParams as i32, problem.to_string())
        }
    }
}

/// Matched spans are shown as plain text highlights, unmatched ones with
/// the write kind so that editors colour them differently.
fn convert_highlights(
    content: &str,
    highlights: &[Highlight],
    encoding: Encoding,
) -> Vec<DocumentHighlight> {
    highlights
        .iter()
        .map(|highlight| DocumentHighlight {
            range: Range::new(
                offset_to_position(content, highlight.start, encoding),
                offset_to_position(content, highlight.end, encoding),
            ),
            kind: Some(match highlight.class {
                Class::Matched => DocumentHighlightKind::TEXT,
                Class::Unmatched => DocumentHighlightKind::WRITE,
            }),
        })
        .collect()
}

/// LSP positions are line and column; analysis works in character offsets.
fn offset_to_position(text: &str, offset: usize, encoding: Encoding) -> Position {
    Position::new(
        calculate_line_number(text, offset) as u32,
        calculate_column_number(text, offset, |c| encoding.units(c)) as u32,
    )
}

fn position_to_offset(text: &str, position: Position, encoding: Encoding) -> usize {
    calculate_offset(
        text,
        position.line as usize,
        position.character as usize,
        |c| encoding.units(c),
    )
}
