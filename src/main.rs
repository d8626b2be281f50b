use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

mod cli;
mod handler;
mod http;
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let port = match cli::parse_port(std::env::args().skip(1)) {
        Ok(port) => port,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: devserve [port]");
            std::process::exit(2);
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, serve(port))
}

async fn serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));

    // Bind failures (port in use, privileged port) are fatal: no retry
    let listener = match bind_loopback(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    let root: Arc<PathBuf> = Arc::new(std::env::current_dir()?);
    logger::log_server_start(&listener.local_addr()?);

    loop {
        let stream = match listener.accept().await {
            Ok((stream, _peer_addr)) => stream,
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
                continue;
            }
        };

        handle_connection(stream, Arc::clone(&root));
    }
}

/// Handle a single connection in a spawned local task.
///
/// Wraps the TCP stream in `TokioIo` and serves HTTP/1.1 on it with the
/// request handler. Per-request failures never terminate the accept loop.
fn handle_connection(stream: tokio::net::TcpStream, root: Arc<PathBuf>) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let root = Arc::clone(&root);
                async move { handler::handle_request(req, &root).await }
            }),
        );

        if let Err(e) = conn.await {
            logger::log_connection_error(&e);
        }
    });
}

/// Create a loopback-only `TcpListener` with `SO_REUSEADDR` enabled.
///
/// `SO_REUSEADDR` lets the server rebind immediately after a kill-and-restart
/// development cycle, without waiting out `TIME_WAIT`. The address is always
/// `127.0.0.1`, never a wildcard: the server must not be reachable from other
/// hosts.
fn bind_loopback(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
