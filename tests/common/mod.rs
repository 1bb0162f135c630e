//! Shared fixtures: an in-process HTTP server and ZIP builder.

#![allow(dead_code)]

use std::io::Write;
use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use zip::write::SimpleFileOptions;

/// Serves `archive` at `/ffmpeg.zip`; every other path answers 404 and
/// `/broken` answers 500.
pub async fn spawn_server(archive: Vec<u8>) -> SocketAddr {
    let app = Router::new()
        .route(
            "/ffmpeg.zip",
            get(move || {
                let body = archive.clone();
                async move { body }
            }),
        )
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// In-memory ZIP with the given `(name, contents)` entries
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, body) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(body).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Layout of the real release bundle, reduced to a few files
pub fn release_bundle() -> Vec<u8> {
    zip_bytes(&[
        ("ffmpeg-7.1-essentials_build/LICENSE", b"GPL"),
        ("ffmpeg-7.1-essentials_build/bin/ffmpeg.exe", b"MZ-ffmpeg"),
        ("ffmpeg-7.1-essentials_build/bin/ffprobe.exe", b"MZ-ffprobe"),
        ("ffmpeg-7.1-essentials_build/presets/libvpx-720p.ffpreset", b"preset"),
    ])
}
