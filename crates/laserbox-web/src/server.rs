//! Accept loop and request handling

use crate::response::{Response, Status};
use crate::route::{parse_route, Route, USAGE};
use anyhow::{Context, Result};
use laserbox_camtools::LaserBoxMaker;
use laserbox_settings::ServerSettings;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// Longest request or header line accepted
const MAX_LINE: usize = 8 * 1024;

/// Upper bound on header lines per request
const MAX_HEADERS: usize = 100;

pub struct Server {
    listener: TcpListener,
    settings: Arc<ServerSettings>,
}

impl Server {
    /// Bind to `settings.bind`.
    pub async fn bind(settings: ServerSettings) -> Result<Self> {
        let listener = TcpListener::bind(&settings.bind)
            .await
            .with_context(|| format!("failed to bind {}", settings.bind))?;
        Ok(Self::from_listener(listener, settings))
    }

    pub fn from_listener(listener: TcpListener, settings: ServerSettings) -> Self {
        Self {
            listener,
            settings: Arc::new(settings),
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve connections until the listener fails.
    pub async fn serve(self) -> Result<()> {
        info!("serving on {}", self.local_addr()?);

        loop {
            let (stream, peer) = self.listener.accept().await?;
            let settings = Arc::clone(&self.settings);

            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, &settings).await {
                    warn!("Connection from {} failed: {:#}", peer, e);
                }
            });
        }
    }
}

/// Read one request from `stream` and write the response.
pub async fn handle_connection(stream: TcpStream, settings: &ServerSettings) -> Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    let request_line = read_line(&mut reader).await?;
    for _ in 0..MAX_HEADERS {
        if read_line(&mut reader).await?.is_empty() {
            break;
        }
    }

    let mut parts = request_line.split_whitespace();
    let (response, include_body) = match (parts.next(), parts.next()) {
        (Some(method), Some(target)) => {
            debug!("{} {}", method, target);
            (respond(target, settings).await, method != "HEAD")
        }
        _ => (
            Response::text(Status::BadRequest, "malformed request line"),
            true,
        ),
    };

    debug!("-> {} ({} bytes)", response.status, response.body.len());
    writer.write_all(&response.to_bytes(include_body)).await?;
    writer.shutdown().await?;
    Ok(())
}

/// Build the response for a request target.
pub async fn respond(target: &str, settings: &ServerSettings) -> Response {
    let error_status = if settings.strict_status {
        Status::BadRequest
    } else {
        Status::Ok
    };

    let route = match parse_route(target) {
        Ok(route) => route,
        Err(e) => return Response::text(error_status, e),
    };

    match route {
        Route::Usage => Response::text(error_status, USAGE),
        Route::Svg(params) => {
            // Layout is CPU-bound; keep it off the runtime workers
            let drawing = tokio::task::spawn_blocking(move || {
                LaserBoxMaker::new(params)
                    .and_then(|maker| maker.generate())
                    .map(|document| document.to_svg())
            })
            .await;

            match drawing {
                Ok(Ok(svg)) => Response::svg(svg),
                Ok(Err(e)) => Response::text(error_status, e),
                Err(e) => {
                    warn!("Drawing task failed: {}", e);
                    Response::text(Status::InternalServerError, "drawing failed")
                }
            }
        }
        Route::Index => match tokio::fs::read(&settings.index_file).await {
            Ok(page) => Response::html(page),
            Err(e) => {
                warn!(
                    "Cannot read index page {}: {}",
                    settings.index_file.display(),
                    e
                );
                let status = if settings.strict_status {
                    Status::NotFound
                } else {
                    Status::Ok
                };
                Response::text(status, e)
            }
        },
    }
}

async fn read_line<R>(reader: &mut R) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = (&mut *reader)
        .take(MAX_LINE as u64)
        .read_line(&mut line)
        .await?;
    anyhow::ensure!(
        read < MAX_LINE || line.ends_with('\n'),
        "request line longer than {} bytes",
        MAX_LINE
    );
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
